//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and hand
//! entity models back to the service layer, which converts them into domain models.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod admin;
pub mod donor;
pub mod hist_blood;
pub mod locality;
pub mod scheduling;
pub mod stock;

#[cfg(test)]
mod test;
