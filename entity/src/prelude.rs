pub use super::admin::Entity as Admin;
pub use super::blood_type_stat::Entity as BloodTypeStat;
pub use super::donor::Entity as Donor;
pub use super::locality::Entity as Locality;
pub use super::scheduling::Entity as Scheduling;
pub use super::stock_batch::Entity as StockBatch;
