use crate::server::{
    data::scheduling::SchedulingRepository,
    model::scheduling::{CreateSchedulingParams, SchedulingStatus, UpdateSchedulingParams},
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
