//! # vendas-core: Entity Records for Vendas
//!
//! Plain data records for car sales, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vendas Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ vendas-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐    │   │
//! │  │   │     types     │   │     money     │   │     error     │    │   │
//! │  │   │  Car          │   │  Money        │   │  CoreError    │    │   │
//! │  │   │  SaleOrder    │   │  (cents)      │   │               │    │   │
//! │  │   └───────────────┘   └───────────────┘   └───────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vendas-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity records (Car, SaleOrder) and the order date codec
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Parse error types
//!
//! ## Example Usage
//!
//! ```rust
//! use vendas_core::{Car, Money};
//!
//! let car = Car::new("Toyota", "Corolla", 2022, "black");
//! assert!(!car.is_persisted());
//!
//! let value: Money = "10000.50".parse().unwrap();
//! assert_eq!(value.to_string(), "$10000.50");
//! ```

pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;
