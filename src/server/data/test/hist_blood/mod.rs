use crate::{
    model::blood_type::BloodType,
    server::{data::hist_blood::BloodTypeStatRepository, model::hist_blood::BloodTypeStat},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod insert_default;
mod upsert;
