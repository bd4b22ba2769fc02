use sea_orm::entity::prelude::*;

/// Turnaround statistics for a single blood type.
///
/// The `backup_*` columns hold the snapshot taken before the most recent update and are
/// either all set or all null.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_type_stat")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub blood_type: String,
    pub received: i32,
    pub sent: f64,
    pub short_time: f64,
    pub long_time: f64,
    pub backup_received: Option<i32>,
    pub backup_sent: Option<f64>,
    pub backup_short_time: Option<f64>,
    pub backup_long_time: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
