//! HemoSync HTTP backend.
//!
//! Everything behind the HTTP listener lives here: route handlers, business rules,
//! persistence and the infrastructure that wires them together. Axum serves the API and
//! SeaORM talks to SQLite.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers: token checks, DTO conversion, status codes
//! - **Service Layer** (`service/`) - Business rules and transactions between controllers and data
//! - **Data Layer** (`data/`) - Repositories over the SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and validated operation parameters
//! - **Error Layer** (`error/`) - `AppError` and its mapping to HTTP responses
//! - **Middleware** (`middleware/`) - Bearer token guard used by protected handlers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Settings read from the environment
//! - **State** (`state`) - Database pool, token keys and configuration shared by handlers
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Routes, OpenAPI document, Swagger UI and HTTP layers
//! - **Util** (`util/`) - Parsing and validation helpers shared by the request models
//!
//! # Request Flow
//!
//! 1. The rate limiter, CORS, compression and security header layers see the request first
//! 2. The router dispatches it to a controller
//! 3. The controller verifies the bearer token on mutating routes and validates the body
//! 4. The service applies the business rules, opening a transaction where needed
//! 5. Repositories read and write entity models
//! 6. The service turns entities into domain models
//! 7. The controller converts them into DTOs and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
