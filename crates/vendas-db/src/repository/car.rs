//! # Car Repository
//!
//! Database operations for the `carro` table.
//!
//! ## Column Mapping
//! ```text
//! carro.id_carro ──► Car.id (Some)
//! carro.marca    ──► Car.brand
//! carro.modelo   ──► Car.model
//! carro.ano      ──► Car.year
//! carro.cor      ──► Car.color
//! ```

use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};

use super::log_failure;
use crate::error::{DbError, DbResult};
use vendas_core::Car;

/// One `carro` row as stored.
#[derive(Debug, FromRow)]
struct CarRow {
    id_carro: i64,
    marca: String,
    modelo: String,
    ano: i32,
    cor: String,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car::new(row.marca, row.modelo, row.ano, row.cor).with_id(row.id_carro)
    }
}

/// Repository for car database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.cars();
///
/// let stored = repo.create(Car::new("Toyota", "Corolla", 2022, "black")).await?;
/// let cars = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    /// Creates a new CarRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CarRepository { pool }
    }

    /// Lists every car in storage order (ascending id).
    ///
    /// An empty table yields an empty vector.
    pub async fn list(&self) -> DbResult<Vec<Car>> {
        debug!("Listing cars");

        let rows: Vec<CarRow> = sqlx::query_as(
            r#"
            SELECT id_carro, marca, modelo, ano, cor
            FROM carro
            ORDER BY id_carro
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Cars loaded");
        Ok(rows.into_iter().map(Car::from).collect())
    }

    /// Gets a car by its identifier.
    ///
    /// ## Returns
    /// * `Ok(Some(Car))` - Car found
    /// * `Ok(None)` - No such id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Car>> {
        let row: Option<CarRow> = sqlx::query_as(
            r#"
            SELECT id_carro, marca, modelo, ano, cor
            FROM carro
            WHERE id_carro = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Car::from))
    }

    /// Inserts a transient car and returns the persisted copy.
    ///
    /// ## Returns
    /// * `Ok(Car)` - Same values, `id` set from `RETURNING id_carro`
    /// * `Err(DbError::AlreadyPersisted)` - Input already had an id
    /// * `Err(DbError::NothingInserted)` - No row came back
    pub async fn create(&self, car: Car) -> DbResult<Car> {
        if let Some(id) = car.id {
            return Err(DbError::already_persisted("Car", id));
        }

        debug!(brand = %car.brand, model = %car.model, year = car.year, "Inserting car");

        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO carro (marca, modelo, ano, cor)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id_carro
            "#,
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .fetch_optional(&self.pool)
        .await?;

        let id = id.ok_or_else(|| DbError::nothing_inserted("Car"))?;

        info!(id, "Car inserted");
        Ok(car.with_id(id))
    }

    /// Counts cars (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carro")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Lists every car, or `None` if storage failed (the cause is logged).
    pub async fn list_all(&self) -> Option<Vec<Car>> {
        log_failure(self.list().await, "Failed to fetch the car list")
    }

    /// Inserts `car` and writes the generated id into it.
    ///
    /// ## Returns
    /// * `true` - Row inserted, `car.id` is now `Some`
    /// * `false` - Anything failed; logged, `car` left unchanged
    pub async fn insert(&self, car: &mut Car) -> bool {
        match log_failure(
            self.create(car.clone()).await,
            "Failed to insert car, see error detail",
        ) {
            Some(stored) => {
                car.id = stored.id;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let db = test_db().await;

        let cars = db.cars().list().await.unwrap();
        assert!(cars.is_empty());

        assert_eq!(db.cars().list_all().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let db = test_db().await;
        let repo = db.cars();

        let mut car = Car::new("Toyota", "Corolla", 2022, "black");
        assert!(repo.insert(&mut car).await);

        let id = car.id.expect("id assigned");
        assert!(id > 0);

        let cars = repo.list_all().await.unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0], car);
        assert_eq!(cars[0].brand, "Toyota");
        assert_eq!(cars[0].model, "Corolla");
        assert_eq!(cars[0].year, 2022);
        assert_eq!(cars[0].color, "black");
    }

    #[tokio::test]
    async fn test_create_returns_persisted_copy() {
        let db = test_db().await;
        let repo = db.cars();

        let first = repo.create(Car::new("Fiat", "Uno", 1998, "red")).await.unwrap();
        let second = repo.create(Car::new("VW", "Gol", 2010, "white")).await.unwrap();

        assert!(first.is_persisted());
        assert_ne!(first.id, second.id);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![first.clone(), second]);

        let fetched = repo.get_by_id(first.id.unwrap()).await.unwrap();
        assert_eq!(fetched, Some(first));
        assert_eq!(repo.get_by_id(9_999).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_quotes_are_stored_verbatim() {
        let db = test_db().await;
        let repo = db.cars();

        let mut bystander = Car::new("Honda", "Civic", 2020, "blue");
        assert!(repo.insert(&mut bystander).await);

        let mut quoted = Car::new("O'Brien Motors", "Roadster", 1965, "British racing green");
        assert!(repo.insert(&mut quoted).await);

        let mut hostile = Car::new("x'); DROP TABLE carro; --", "'", 2000, "\"");
        assert!(repo.insert(&mut hostile).await);

        let cars = repo.list().await.unwrap();
        assert_eq!(cars, vec![bystander, quoted, hostile]);
        assert_eq!(cars[1].brand, "O'Brien Motors");
    }

    #[tokio::test]
    async fn test_insert_failure_leaves_id_unset() {
        let db = test_db().await;
        let repo = db.cars();
        db.close().await;

        let mut car = Car::new("Toyota", "Corolla", 2022, "black");
        assert!(!repo.insert(&mut car).await);
        assert_eq!(car.id, None);

        assert!(repo.list_all().await.is_none());
    }

    #[tokio::test]
    async fn test_insert_fails_when_table_missing() {
        let db = test_db().await;
        sqlx::query("DROP TABLE carro").execute(db.pool()).await.unwrap();

        let err = db
            .cars()
            .create(Car::new("Toyota", "Corolla", 2022, "black"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));

        let mut car = Car::new("Toyota", "Corolla", 2022, "black");
        assert!(!db.cars().insert(&mut car).await);
        assert!(!car.is_persisted());
    }

    #[tokio::test]
    async fn test_persisted_car_is_not_inserted_again() {
        let db = test_db().await;
        let repo = db.cars();

        let stored = repo.create(Car::new("Ford", "Ka", 2015, "silver")).await.unwrap();
        let err = repo.create(stored.clone()).await.unwrap_err();
        assert!(matches!(err, DbError::AlreadyPersisted { id, .. } if Some(id) == stored.id));

        let mut again = stored.clone();
        assert!(!repo.insert(&mut again).await);
        assert_eq!(again.id, stored.id);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_zero_row_insert_leaves_id_unset() {
        let db = test_db().await;
        sqlx::query(
            "CREATE TRIGGER carro_discard BEFORE INSERT ON carro
             BEGIN SELECT RAISE(IGNORE); END",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let err = db
            .cars()
            .create(Car::new("Toyota", "Corolla", 2022, "black"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NothingInserted { ref entity } if entity == "Car"));

        let mut car = Car::new("Toyota", "Corolla", 2022, "black");
        assert!(!db.cars().insert(&mut car).await);
        assert_eq!(car.id, None);
        assert_eq!(db.cars().count().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let path = std::env::temp_dir().join(format!(
            "vendas-concurrent-{}-{}.db",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let db = Database::new(DbConfig::new(path.clone()).max_connections(4))
            .await
            .unwrap();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = db.cars();
                tokio::spawn(async move {
                    repo.create(Car::new("Brand", format!("Model {i}"), 2000 + i, "grey"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 20);
        assert_eq!(db.cars().count().await.unwrap(), 20);

        db.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let mut file = path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
