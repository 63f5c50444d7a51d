//! # Seed Data Generator
//!
//! Populates the database with sample cars and a sample sale order, then
//! lists both tables.
//!
//! ## Usage
//! ```bash
//! # Use VENDAS_DB_PATH or ./vendas.db
//! cargo run -p vendas-db --bin seed
//!
//! # Specify database path
//! cargo run -p vendas-db --bin seed -- --db ./data/vendas.db
//!
//! # Print listings as JSON
//! cargo run -p vendas-db --bin seed -- --json
//! ```
//!
//! Cars are only seeded into an empty `carro` table. One sale order is
//! added on every run.

use chrono::Utc;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vendas_core::{Car, Money, SaleOrder};
use vendas_db::{Database, DbConfig};

/// Sample cars: (brand, model, year, color)
const CARS: &[(&str, &str, i32, &str)] = &[
    ("Toyota", "Corolla", 2022, "black"),
    ("Honda", "Civic", 2021, "silver"),
    ("Volkswagen", "Gol", 2019, "white"),
    ("Fiat", "Uno", 2017, "red"),
    ("Chevrolet", "Onix", 2023, "blue"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args)?;

    if options.help {
        print_help();
        return Ok(());
    }

    // After argument parsing, so --help works with a broken environment
    let mut config = DbConfig::from_env()?;
    if let Some(path) = options.db_path {
        config.database_path = path.into();
    }

    let db = Database::new(config).await?;
    let cars = db.cars();
    let orders = db.sale_orders();

    let existing = cars.count().await?;
    if existing > 0 {
        info!(existing, "Cars already present, skipping car seed");
    } else {
        for (brand, model, year, color) in CARS {
            let mut car = Car::new(*brand, *model, *year, *color);
            if !cars.insert(&mut car).await {
                eprintln!("Failed to insert {} {}", brand, model);
            }
        }
    }

    let mut order = SaleOrder::new(1, 1, Utc::now(), Money::from_major_minor(10_000, 50));
    if orders.insert(&mut order).await {
        println!("Sale order stored with id {}", order.id.unwrap_or_default());
    }

    let Some(all_cars) = cars.list_all().await else {
        eprintln!("Could not list cars");
        db.close().await;
        return Ok(());
    };
    let Some(all_orders) = orders.list_all().await else {
        eprintln!("Could not list sale orders");
        db.close().await;
        return Ok(());
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&all_cars)?);
        println!("{}", serde_json::to_string_pretty(&all_orders)?);
    } else {
        println!();
        println!("Cars ({}):", all_cars.len());
        for car in &all_cars {
            println!(
                "  #{} {} {} {} ({})",
                car.id.unwrap_or_default(),
                car.brand,
                car.model,
                car.year,
                car.color
            );
        }

        println!();
        println!("Sale orders ({}):", all_orders.len());
        let mut total = Money::zero();
        for order in &all_orders {
            total += order.order_value;
            println!(
                "  #{} car {} customer {} on {} value {}",
                order.id.unwrap_or_default(),
                order.car_id,
                order.customer_id,
                order.order_date.to_rfc3339(),
                order.order_value
            );
        }
        println!("  Total: {}", total);
    }

    db.close().await;
    Ok(())
}

/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct SeedOptions {
    db_path: Option<String>,
    json: bool,
    help: bool,
}

/// Parses `args` (program name first). Unknown arguments are ignored.
fn parse_args(args: &[String]) -> Result<SeedOptions, String> {
    let mut options = SeedOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                let Some(path) = args.get(i + 1) else {
                    return Err(format!("{} requires a path", args[i]));
                };
                options.db_path = Some(path.clone());
                i += 1;
            }
            "--json" | "-j" => options.json = true,
            "--help" | "-h" => options.help = true,
            _ => {}
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Vendas Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -d, --db <PATH>    Database file path (default: $VENDAS_DB_PATH or ./vendas.db)");
    println!("  -j, --json         Print listings as JSON");
    println!("  -h, --help         Show this help message");
}

/// Installs the fmt subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: `info,vendas_db=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vendas_db=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("seed")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--db", "/tmp/v.db", "-j"])).unwrap();
        assert_eq!(options.db_path.as_deref(), Some("/tmp/v.db"));
        assert!(options.json);
        assert!(!options.help);

        assert_eq!(parse_args(&args(&[])).unwrap(), SeedOptions::default());
    }

    #[test]
    fn test_missing_db_value_is_an_error() {
        let err = parse_args(&args(&["--json", "--db"])).unwrap_err();
        assert!(err.contains("--db"));
    }

    #[test]
    fn test_help_does_not_need_environment() {
        std::env::set_var(vendas_db::pool::ENV_DB_MAX_CONNECTIONS, "lots");

        let options = parse_args(&args(&["-d", "x.db", "--help"])).unwrap();
        assert!(options.help);
        assert!(DbConfig::from_env().is_err());

        std::env::remove_var(vendas_db::pool::ENV_DB_MAX_CONNECTIONS);
    }
}
