//! # Sale Order Repository
//!
//! Database operations for the `pedido_venda` table.
//!
//! ## Column Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pedido_venda.id_pedido    ──► SaleOrder.id (Some)                      │
//! │  pedido_venda.id_carro     ──► SaleOrder.car_id                         │
//! │  pedido_venda.id_cliente   ──► SaleOrder.customer_id                    │
//! │  pedido_venda.data_pedido  ──► parse_order_date() ──► order_date        │
//! │     "2024-01-01T00:00:00.000Z"                                          │
//! │  pedido_venda.valor_pedido ──► Money::from_str()  ──► order_value       │
//! │     "10000.50"                                                          │
//! │                                                                         │
//! │  A row whose date or value text does not parse fails the whole read    │
//! │  with DbError::Decode.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};

use super::log_failure;
use crate::error::{DbError, DbResult};
use vendas_core::{format_order_date, parse_order_date, Money, SaleOrder};

/// One `pedido_venda` row as stored.
#[derive(Debug, FromRow)]
struct SaleOrderRow {
    id_pedido: i64,
    id_carro: i64,
    id_cliente: i64,
    data_pedido: String,
    valor_pedido: String,
}

impl TryFrom<SaleOrderRow> for SaleOrder {
    type Error = DbError;

    fn try_from(row: SaleOrderRow) -> DbResult<Self> {
        let order_date = parse_order_date(&row.data_pedido)?;
        let order_value: Money = row.valor_pedido.parse()?;

        Ok(SaleOrder::new(row.id_carro, row.id_cliente, order_date, order_value).with_id(row.id_pedido))
    }
}

fn decode_rows(rows: Vec<SaleOrderRow>) -> DbResult<Vec<SaleOrder>> {
    rows.into_iter().map(SaleOrder::try_from).collect()
}

/// Repository for sale order database operations.
#[derive(Debug, Clone)]
pub struct SaleOrderRepository {
    pool: SqlitePool,
}

impl SaleOrderRepository {
    /// Creates a new SaleOrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleOrderRepository { pool }
    }

    /// Lists every sale order in storage order (ascending id).
    pub async fn list(&self) -> DbResult<Vec<SaleOrder>> {
        debug!("Listing sale orders");

        let rows: Vec<SaleOrderRow> = sqlx::query_as(
            r#"
            SELECT id_pedido, id_carro, id_cliente, data_pedido, valor_pedido
            FROM pedido_venda
            ORDER BY id_pedido
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Sale orders loaded");
        decode_rows(rows)
    }

    /// Lists the sale orders referencing one car.
    pub async fn list_for_car(&self, car_id: i64) -> DbResult<Vec<SaleOrder>> {
        debug!(car_id, "Listing sale orders for car");

        let rows: Vec<SaleOrderRow> = sqlx::query_as(
            r#"
            SELECT id_pedido, id_carro, id_cliente, data_pedido, valor_pedido
            FROM pedido_venda
            WHERE id_carro = ?1
            ORDER BY id_pedido
            "#,
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        decode_rows(rows)
    }

    /// Gets a sale order by its identifier.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<SaleOrder>> {
        let row: Option<SaleOrderRow> = sqlx::query_as(
            r#"
            SELECT id_pedido, id_carro, id_cliente, data_pedido, valor_pedido
            FROM pedido_venda
            WHERE id_pedido = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SaleOrder::try_from).transpose()
    }

    /// Inserts a transient sale order and returns the persisted copy.
    ///
    /// ## Storage Format
    /// - `data_pedido`: ISO 8601, UTC, milliseconds (`2024-01-01T00:00:00.000Z`)
    /// - `valor_pedido`: two-decimal text (`10000.50`)
    pub async fn create(&self, order: SaleOrder) -> DbResult<SaleOrder> {
        if let Some(id) = order.id {
            return Err(DbError::already_persisted("SaleOrder", id));
        }

        debug!(
            car_id = order.car_id,
            customer_id = order.customer_id,
            value = %order.order_value,
            "Inserting sale order"
        );

        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO pedido_venda (id_carro, id_cliente, data_pedido, valor_pedido)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id_pedido
            "#,
        )
        .bind(order.car_id)
        .bind(order.customer_id)
        .bind(format_order_date(&order.order_date))
        .bind(order.order_value.to_decimal_string())
        .fetch_optional(&self.pool)
        .await?;

        let id = id.ok_or_else(|| DbError::nothing_inserted("SaleOrder"))?;

        info!(id, "Sale order inserted");
        Ok(order.with_id(id))
    }

    /// Counts sale orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pedido_venda")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Lists every sale order, or `None` if storage failed (the cause is logged).
    pub async fn list_all(&self) -> Option<Vec<SaleOrder>> {
        log_failure(self.list().await, "Failed to fetch the sale order list")
    }

    /// Inserts `order` and writes the generated id into it.
    ///
    /// Returns `false` on any failure and leaves `order` unchanged.
    pub async fn insert(&self, order: &mut SaleOrder) -> bool {
        match log_failure(
            self.create(order.clone()).await,
            "Failed to insert sale order, see error detail",
        ) {
            Some(stored) => {
                order.id = stored.id;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
