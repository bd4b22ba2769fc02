//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, turn request DTOs into validated params,
//! call the matching service and convert the returned domain models back into DTOs.

pub mod auth;
pub mod donor;
pub mod hist_blood;
pub mod locality;
pub mod scheduling;
pub mod stock;
