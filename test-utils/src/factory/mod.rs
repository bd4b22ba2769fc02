//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let donor = factory::donor::create_donor(&db).await?;
//!     let batch = factory::stock_batch::create_stock_batch(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let donor = factory::donor::DonorFactory::new(&db)
//!     .blood_type("O-")
//!     .name("Maria Oliveira")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `admin` - Create admin credential entities
//! - `blood_type_stat` - Create blood-type statistic rows
//! - `donor` - Create donor entities
//! - `locality` - Create locality entities
//! - `scheduling` - Create scheduling entities
//! - `stock_batch` - Create stock batch entities
//! - `helpers` - Shared ID generation

pub mod admin;
pub mod blood_type_stat;
pub mod donor;
pub mod helpers;
pub mod locality;
pub mod scheduling;
pub mod stock_batch;

pub use admin::create_admin;
pub use blood_type_stat::{create_stat, seed_all_stats};
pub use donor::create_donor;
pub use locality::create_locality;
pub use scheduling::create_scheduling;
pub use stock_batch::create_stock_batch;
