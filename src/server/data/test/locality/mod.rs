use crate::server::{data::locality::LocalityRepository, model::locality::LocalityParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn locality_params(city: &str) -> LocalityParams {
    LocalityParams {
        street: "Rua Augusta, 1500".to_string(),
        neighborhood: "Consolação".to_string(),
        zip: "01304-001".to_string(),
        city: city.to_string(),
        state: "SP".to_string(),
    }
}
