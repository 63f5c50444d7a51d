//! # vendas-db: Database Layer for Vendas
//!
//! This crate provides database access for cars and sale orders.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vendas Data Flow                                 │
//! │                                                                         │
//! │  Caller (seed binary, service, ...)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     vendas-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │  │   │
//! │  │   │               │    │ CarRepository  │   │              │  │   │
//! │  │   │ SqlitePool    │◄───│ SaleOrderRepo  │   │ 001_initial_ │  │   │
//! │  │   │ DbConfig      │    │                │   │ schema.sql   │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (carro, pedido_venda)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Car and sale order repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vendas_core::Car;
//! use vendas_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let mut car = Car::new("Toyota", "Corolla", 2022, "black");
//! if db.cars().insert(&mut car).await {
//!     println!("stored as {:?}", car.id);
//! }
//!
//! let cars = db.cars().list_all().await; // None if storage failed
//! db.close().await;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::car::CarRepository;
pub use repository::sale_order::SaleOrderRepository;
