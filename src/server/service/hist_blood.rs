use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::blood_type::BloodType,
    server::{
        data::hist_blood::BloodTypeStatRepository,
        error::AppError,
        model::hist_blood::{BloodTypeStat, RecordTurnaroundParams, SeedOutcome, StatLookup},
    },
};

/// Message returned when seeding finds every blood type already present.
pub const ALREADY_SEEDED_MESSAGE: &str = "Os tipos sanguíneos já existem no banco.";

pub struct HistBloodService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistBloodService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the initial record of every blood type that doesn't have one yet
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Created(_))` - Missing records were inserted; holds all eight
    /// - `Ok(SeedOutcome::AlreadyExists)` - Nothing was missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn seed(&self) -> Result<SeedOutcome, AppError> {
        let txn = self.db.begin().await?;
        let repo = BloodTypeStatRepository::new(&txn);

        let mut created = 0;
        for blood_type in BloodType::ALL {
            if repo.find(blood_type).await?.is_none() {
                repo.insert_default(blood_type).await?;
                created += 1;
            }
        }

        if created == 0 {
            txn.rollback().await?;
            return Ok(SeedOutcome::AlreadyExists);
        }

        txn.commit().await?;

        tracing::info!("Seeded {} blood type statistics records", created);

        Ok(SeedOutcome::Created(self.get_all().await?))
    }

    /// Gets every stored record in blood type order
    pub async fn get_all(&self) -> Result<Vec<BloodTypeStat>, AppError> {
        let repo = BloodTypeStatRepository::new(self.db);

        let mut stats = repo
            .get_all()
            .await?
            .into_iter()
            .map(BloodTypeStat::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        stats.sort_by_key(|stat| {
            BloodType::ALL
                .iter()
                .position(|blood_type| *blood_type == stat.blood_type)
        });

        Ok(stats)
    }

    /// Gets the record of the blood type named by `raw`
    ///
    /// # Returns
    /// - `Ok(StatLookup::Found(_))` - The record
    /// - `Ok(StatLookup::UnknownType)` - `raw` doesn't name a blood type
    /// - `Err(AppError::NotFound)` - Known type without a record
    pub async fn get_by_type(&self, raw: &str) -> Result<StatLookup<BloodTypeStat>, AppError> {
        let Ok(blood_type) = raw.parse::<BloodType>() else {
            return Ok(StatLookup::UnknownType);
        };

        let repo = BloodTypeStatRepository::new(self.db);
        let stat = repo
            .find(blood_type)
            .await?
            .ok_or_else(|| not_seeded(blood_type))?;

        Ok(StatLookup::Found(BloodTypeStat::from_entity(stat)?))
    }

    /// Records an observed turnaround for the blood type named by `raw`
    ///
    /// The read, the arithmetic and the write of the record and its backup happen in one
    /// transaction.
    pub async fn update(
        &self,
        raw: &str,
        params: RecordTurnaroundParams,
    ) -> Result<StatLookup<BloodTypeStat>, AppError> {
        let Ok(blood_type) = raw.parse::<BloodType>() else {
            return Ok(StatLookup::UnknownType);
        };

        let txn = self.db.begin().await?;
        let repo = BloodTypeStatRepository::new(&txn);

        let entity = repo
            .find(blood_type)
            .await?
            .ok_or_else(|| not_seeded(blood_type))?;
        let mut stat = BloodTypeStat::from_entity(entity)?;

        stat.record(params.days);
        repo.upsert(&stat).await?;
        txn.commit().await?;

        tracing::debug!(
            "Recorded {} days for {}; received={} sent={}",
            params.days,
            blood_type,
            stat.current.received,
            stat.current.sent
        );

        Ok(StatLookup::Found(stat))
    }

    /// Restores the record saved by the last update of the blood type named by `raw`
    ///
    /// Without a saved snapshot the record is returned unchanged.
    pub async fn revert_last(&self, raw: &str) -> Result<StatLookup<BloodTypeStat>, AppError> {
        let Ok(blood_type) = raw.parse::<BloodType>() else {
            return Ok(StatLookup::UnknownType);
        };

        let txn = self.db.begin().await?;
        let repo = BloodTypeStatRepository::new(&txn);

        let entity = repo
            .find(blood_type)
            .await?
            .ok_or_else(|| not_seeded(blood_type))?;
        let mut stat = BloodTypeStat::from_entity(entity)?;

        if stat.revert_last() {
            repo.upsert(&stat).await?;
            txn.commit().await?;
            tracing::info!("Reverted last update of {}", blood_type);
        } else {
            txn.rollback().await?;
        }

        Ok(StatLookup::Found(stat))
    }

    /// Resets all eight records to their initial values, creating any that are missing
    pub async fn reset(&self) -> Result<Vec<BloodTypeStat>, AppError> {
        let txn = self.db.begin().await?;
        let repo = BloodTypeStatRepository::new(&txn);

        let mut stats = Vec::with_capacity(BloodType::ALL.len());
        for blood_type in BloodType::ALL {
            let stat = BloodTypeStat::new(blood_type);
            repo.upsert(&stat).await?;
            stats.push(stat);
        }

        txn.commit().await?;

        tracing::info!("Reset all blood type statistics");

        Ok(stats)
    }
}

fn not_seeded(blood_type: BloodType) -> AppError {
    AppError::NotFound(format!(
        "No statistics for {}; seed them with POST /api/hist-blood/create",
        blood_type
    ))
}
