pub mod prelude;

pub mod admin;
pub mod blood_type_stat;
pub mod donor;
pub mod locality;
pub mod scheduling;
pub mod stock_batch;
