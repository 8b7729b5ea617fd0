//! Server-side API backend and game logic.
//!
//! The backend uses Axum as the web framework, SeaORM over SQLite for persistence and
//! `tokio-cron-scheduler` for the periodic quest, leaderboard and achievement jobs.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, identity checks, and DTO conversion
//! - **Service Layer** (`service/`) - Game rules, transactions and follow-up notifications
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, game constants and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Agent identity and admin key guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Database connection, migrations and game data seeding
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document for Swagger UI
//! - **Scheduler** (`scheduler/`) - Cron jobs for quest resets, weekly rewards and achievement sweeps
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** resolves the caller through `AgentGuard` or `AdminGuard`
//! 3. **Service** applies the game rules, opening a transaction for multi-row changes
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the `{"success": true}` envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
