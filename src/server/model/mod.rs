//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs by `from_dto` constructors, which perform
//! all field validation before a service is called.

pub mod admin;
pub mod donor;
pub mod hist_blood;
pub mod locality;
pub mod scheduling;
pub mod stock;
