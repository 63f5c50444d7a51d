//! # Domain Types
//!
//! Entity records used throughout vendas.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────────┐          │
//! │  │        Car          │          │       SaleOrder         │          │
//! │  │  ─────────────────  │          │  ─────────────────────  │          │
//! │  │  id: Option<i64>    │◄─ ─ ─ ─ ─│  id: Option<i64>        │          │
//! │  │  brand              │  car_id  │  car_id                 │          │
//! │  │  model              │ (no FK)  │  customer_id            │          │
//! │  │  year               │          │  order_date (UTC)       │          │
//! │  │  color              │          │  order_value (Money)    │          │
//! │  └─────────────────────┘          └─────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is `None` while a record is transient. Only the database assigns it,
//! and a record with `Some(id)` is never written again.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Car
// =============================================================================

/// A car offered for sale (`carro` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Storage-assigned identifier (`id_carro`).
    pub id: Option<i64>,

    /// Manufacturer, e.g. "Toyota" (`marca`).
    pub brand: String,

    /// Model name, e.g. "Corolla" (`modelo`).
    pub model: String,

    /// Model year (`ano`).
    pub year: i32,

    /// Paint color (`cor`).
    pub color: String,
}

impl Car {
    /// Creates a transient car with no identifier.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        color: impl Into<String>,
    ) -> Self {
        Car {
            id: None,
            brand: brand.into(),
            model: model.into(),
            year,
            color: color.into(),
        }
    }

    /// Returns a copy carrying the identifier assigned by storage.
    pub fn with_id(self, id: i64) -> Self {
        Car {
            id: Some(id),
            ..self
        }
    }

    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Sale Order
// =============================================================================

/// A sale order for one car (`pedido_venda` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    /// Storage-assigned identifier (`id_pedido`).
    pub id: Option<i64>,

    /// Car being sold. Not checked against `carro`.
    pub car_id: i64,

    /// Buying customer. Customers are not modeled here.
    pub customer_id: i64,

    /// When the order was placed.
    pub order_date: DateTime<Utc>,

    /// Total order value.
    pub order_value: Money,
}

impl SaleOrder {
    /// Creates a transient sale order with no identifier.
    pub fn new(car_id: i64, customer_id: i64, order_date: DateTime<Utc>, order_value: Money) -> Self {
        SaleOrder {
            id: None,
            car_id,
            customer_id,
            order_date,
            order_value,
        }
    }

    /// Returns a copy carrying the identifier assigned by storage.
    pub fn with_id(self, id: i64) -> Self {
        SaleOrder {
            id: Some(id),
            ..self
        }
    }

    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Date Encoding
// =============================================================================

/// Encodes an order date the way it is stored in `data_pedido`.
///
/// ISO 8601 in UTC with millisecond precision and a `Z` suffix,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_order_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored `data_pedido` value back into a UTC timestamp.
///
/// Any RFC 3339 offset is accepted and normalized to UTC. Years outside
/// 0000-9999 are written with a sign (`+10000-01-01T00:00:00.000Z`), the
/// ISO 8601 expanded form, and are read back the same way.
pub fn parse_order_date(value: &str) -> CoreResult<DateTime<Utc>> {
    let input = value.trim();

    let parsed = if input.starts_with('+') || input.starts_with('-') {
        DateTime::parse_from_str(input, EXPANDED_YEAR_FORMAT)
    } else {
        DateTime::parse_from_rfc3339(input)
    };

    parsed
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// `%Y` takes a signed year of any width, `%#z` accepts `Z` or an offset.
const EXPANDED_YEAR_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%#z";

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_new_car_is_transient() {
        let car = Car::new("Toyota", "Corolla", 2022, "black");
        assert!(!car.is_persisted());
        assert_eq!(car.id, None);

        let stored = car.clone().with_id(7);
        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.brand, car.brand);
        assert_eq!(stored.year, 2022);
    }

    #[test]
    fn test_new_sale_order_is_transient() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let order = SaleOrder::new(1, 1, date, Money::from_cents(1_000_050));
        assert!(!order.is_persisted());

        let stored = order.with_id(3);
        assert!(stored.is_persisted());
        assert_eq!(stored.order_value.cents(), 1_000_050);
    }

    #[test]
    fn test_order_date_round_trip() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let encoded = format_order_date(&date);
        assert_eq!(encoded, "2024-01-01T00:00:00.000Z");
        assert_eq!(parse_order_date(&encoded).unwrap(), date);
    }

    #[test]
    fn test_parse_order_date_normalizes_offset() {
        let parsed = parse_order_date("2024-01-01T03:00:00+03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_order_date_rejects_garbage() {
        let err = parse_order_date("01/01/2024").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { .. }));
    }

    #[test]
    fn test_far_dates_round_trip() {
        let far_future = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let encoded = format_order_date(&far_future);
        assert_eq!(encoded, "+10000-01-01T00:00:00.000Z");
        assert_eq!(parse_order_date(&encoded).unwrap(), far_future);

        let before_epoch = Utc.with_ymd_and_hms(-1, 6, 15, 12, 30, 0).unwrap();
        let encoded = format_order_date(&before_epoch);
        assert!(encoded.starts_with('-'));
        assert_eq!(parse_order_date(&encoded).unwrap(), before_epoch);

        for date in [DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
            let date = date.with_nanosecond(0).unwrap();
            assert_eq!(parse_order_date(&format_order_date(&date)).unwrap(), date);
        }
    }

    #[test]
    fn test_car_serializes_with_optional_id() {
        let json = serde_json::to_value(Car::new("Fiat", "Uno", 1998, "red")).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["brand"], "Fiat");
    }
}
