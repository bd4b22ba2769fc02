//! Request guards applied by controllers before they reach the service layer.

pub mod auth;
