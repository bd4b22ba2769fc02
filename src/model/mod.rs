//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON wire format. Request DTOs are intentionally loose (mostly
//! optional fields) so that missing or malformed values surface as field-level validation
//! errors instead of opaque deserialization failures.

pub mod api;
pub mod auth;
pub mod blood_type;
pub mod donor;
pub mod hist_blood;
pub mod locality;
pub mod scheduling;
pub mod stock;
