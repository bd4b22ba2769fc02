use crate::{
    model::blood_type::BloodType,
    server::{
        data::stock::StockBatchRepository,
        model::stock::{StockBatchParams, StockStatus},
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
mod update_quantity;

fn batch_params(lot: &str) -> StockBatchParams {
    StockBatchParams {
        lot: lot.to_string(),
        blood_type: BloodType::OPositive,
        quantity: 8,
        expiration_date: NaiveDate::from_ymd_opt(2030, 1, 31).unwrap(),
        status: StockStatus::Available,
    }
}
