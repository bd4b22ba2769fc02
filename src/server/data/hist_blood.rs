use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{model::blood_type::BloodType, server::model::hist_blood::BloodTypeStat};

/// Statistics rows keyed by blood-type label.
///
/// Generic over the connection so that read-modify-write sequences can run inside a
/// `DatabaseTransaction`.
pub struct BloodTypeStatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BloodTypeStatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::blood_type_stat::Model>, DbErr> {
        entity::prelude::BloodTypeStat::find().all(self.db).await
    }

    pub async fn find(
        &self,
        blood_type: BloodType,
    ) -> Result<Option<entity::blood_type_stat::Model>, DbErr> {
        entity::prelude::BloodTypeStat::find_by_id(blood_type.label().to_string())
            .one(self.db)
            .await
    }

    /// Writes the full record, backup slot included, creating the row if missing
    pub async fn upsert(&self, stat: &BloodTypeStat) -> Result<(), DbErr> {
        use entity::blood_type_stat::Column;

        let backup = stat.backup;

        entity::prelude::BloodTypeStat::insert(entity::blood_type_stat::ActiveModel {
            blood_type: ActiveValue::Set(stat.blood_type.label().to_string()),
            received: ActiveValue::Set(stat.current.received),
            sent: ActiveValue::Set(stat.current.sent),
            short_time: ActiveValue::Set(stat.current.short_time),
            long_time: ActiveValue::Set(stat.current.long_time),
            backup_received: ActiveValue::Set(backup.map(|b| b.received)),
            backup_sent: ActiveValue::Set(backup.map(|b| b.sent)),
            backup_short_time: ActiveValue::Set(backup.map(|b| b.short_time)),
            backup_long_time: ActiveValue::Set(backup.map(|b| b.long_time)),
        })
        .on_conflict(
            OnConflict::column(Column::BloodType)
                .update_columns([
                    Column::Received,
                    Column::Sent,
                    Column::ShortTime,
                    Column::LongTime,
                    Column::BackupReceived,
                    Column::BackupSent,
                    Column::BackupShortTime,
                    Column::BackupLongTime,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Inserts the initial record for `blood_type`; fails if the row already exists
    pub async fn insert_default(
        &self,
        blood_type: BloodType,
    ) -> Result<entity::blood_type_stat::Model, DbErr> {
        let stat = BloodTypeStat::new(blood_type);

        entity::prelude::BloodTypeStat::insert(entity::blood_type_stat::ActiveModel {
            blood_type: ActiveValue::Set(blood_type.label().to_string()),
            received: ActiveValue::Set(stat.current.received),
            sent: ActiveValue::Set(stat.current.sent),
            short_time: ActiveValue::Set(stat.current.short_time),
            long_time: ActiveValue::Set(stat.current.long_time),
            backup_received: ActiveValue::Set(None),
            backup_sent: ActiveValue::Set(None),
            backup_short_time: ActiveValue::Set(None),
            backup_long_time: ActiveValue::Set(None),
        })
        .exec_with_returning(self.db)
        .await
    }
}
