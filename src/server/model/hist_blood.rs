//! Blood-type turnaround statistics.
//!
//! Each blood type owns one `BloodTypeStat` record holding its current aggregate and at
//! most one saved snapshot. Recording an observation saves the previous aggregate into
//! that slot, so the latest update can be undone exactly once.

use crate::{
    model::{
        blood_type::BloodType,
        hist_blood::{BloodTypeStatDto, UpdateSentDto},
    },
    server::error::{validation::ValidationErrors, AppError},
};

/// Aggregate values tracked per blood type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSnapshot {
    /// Number of observations recorded.
    pub received: i32,
    /// Running turnaround figure in days.
    pub sent: f64,
    /// Shortest turnaround seen, in days.
    pub short_time: f64,
    /// Longest turnaround seen, in days.
    pub long_time: f64,
}

impl StatSnapshot {
    /// Aggregate of a freshly seeded or reset record.
    pub const INITIAL: StatSnapshot = StatSnapshot {
        received: 0,
        sent: 0.0,
        short_time: 20.0,
        long_time: 0.0,
    };
}

/// Statistics record for one blood type, including its single undo slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BloodTypeStat {
    pub blood_type: BloodType,
    pub current: StatSnapshot,
    /// Aggregate as it was before the most recent `record`, if not yet reverted.
    pub backup: Option<StatSnapshot>,
}

impl BloodTypeStat {
    /// Creates a record with the initial aggregate and no backup.
    pub fn new(blood_type: BloodType) -> Self {
        Self {
            blood_type,
            current: StatSnapshot::INITIAL,
            backup: None,
        }
    }

    /// Records one observed turnaround of `days`.
    ///
    /// The previous aggregate replaces whatever was in the backup slot. `sent` becomes
    /// `(days + previous sent) / new received`, which is not an arithmetic mean.
    pub fn record(&mut self, days: f64) {
        let previous = self.current;
        let received = previous.received + 1;

        self.backup = Some(previous);
        self.current = StatSnapshot {
            received,
            sent: (days + previous.sent) / f64::from(received),
            short_time: previous.short_time.min(days),
            long_time: previous.long_time.max(days),
        };
    }

    /// Restores the aggregate saved by the last `record` and empties the slot.
    ///
    /// # Returns
    /// - `true` - A snapshot was restored
    /// - `false` - Nothing was saved; the record is unchanged
    pub fn revert_last(&mut self) -> bool {
        match self.backup.take() {
            Some(snapshot) => {
                self.current = snapshot;
                true
            }
            None => false,
        }
    }

    /// Returns the record to its initial aggregate and discards the backup.
    pub fn reset(&mut self) {
        self.current = StatSnapshot::INITIAL;
        self.backup = None;
    }

    /// Converts an entity model to a statistics domain model at the repository boundary.
    ///
    /// A backup is only recognized when all four `backup_*` columns are set.
    ///
    /// # Returns
    /// - `Ok(BloodTypeStat)` - The converted record
    /// - `Err(AppError::InternalError)` - The stored key is not a known blood type
    pub fn from_entity(entity: entity::blood_type_stat::Model) -> Result<Self, AppError> {
        let blood_type = entity.blood_type.parse::<BloodType>().map_err(|e| {
            AppError::InternalError(format!("Corrupt blood_type_stat row: {}", e))
        })?;

        let backup = match (
            entity.backup_received,
            entity.backup_sent,
            entity.backup_short_time,
            entity.backup_long_time,
        ) {
            (Some(received), Some(sent), Some(short_time), Some(long_time)) => Some(StatSnapshot {
                received,
                sent,
                short_time,
                long_time,
            }),
            _ => None,
        };

        Ok(Self {
            blood_type,
            current: StatSnapshot {
                received: entity.received,
                sent: entity.sent,
                short_time: entity.short_time,
                long_time: entity.long_time,
            },
            backup,
        })
    }

    pub fn into_dto(self) -> BloodTypeStatDto {
        BloodTypeStatDto {
            blood_type: self.blood_type,
            received: self.current.received,
            sent: self.current.sent,
            short_time: self.current.short_time,
            long_time: self.current.long_time,
            can_revert: self.backup.is_some(),
        }
    }
}

/// Result of a lookup by a caller-supplied blood-type string.
#[derive(Debug, Clone, PartialEq)]
pub enum StatLookup<T> {
    Found(T),
    /// The string did not name one of the eight blood types.
    UnknownType,
}

/// Result of seeding the statistics table.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// At least one missing record was inserted; holds all eight records.
    Created(Vec<BloodTypeStat>),
    /// Every blood type already had a record.
    AlreadyExists,
}

/// Observed turnaround submitted to an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordTurnaroundParams {
    pub days: f64,
}

impl RecordTurnaroundParams {
    /// Validates the request body of a statistics update.
    ///
    /// # Returns
    /// - `Ok(RecordTurnaroundParams)` - `sent` is a finite number `>= 0`
    /// - `Err(ValidationErrors)` - `sent` is missing, negative, or not finite
    pub fn from_dto(dto: UpdateSentDto) -> Result<Self, ValidationErrors> {
        match dto.sent {
            None => Err(ValidationErrors::single("sent", "sent is required")),
            Some(days) if days.is_finite() && days >= 0.0 => Ok(Self { days }),
            Some(_) => Err(ValidationErrors::single("sent", "sent must be a number >= 0")),
        }
    }
}
