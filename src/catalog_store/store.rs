//! SQLite-backed catalog store implementation.

use super::models::*;
use super::schema::CATALOG_VERSIONED_SCHEMAS;
use super::trait_def::CatalogStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQLite-backed catalog store for movie products.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
}

fn open_schema(conn: &Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = CATALOG_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &CATALOG_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!("Creating catalog db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    if db_version < BASE_DB_VERSION as i64 {
        bail!(
            "Database has user_version {}, it was not created by this tool",
            db_version
        );
    }

    let current_version = (db_version - BASE_DB_VERSION as i64) as usize;
    if current_version > latest_version {
        bail!(
            "Catalog db is at version {}, newer than the latest known version {}",
            current_version,
            latest_version
        );
    }
    latest_schema.validate(conn)
}

fn product_from_row(row: &Row) -> rusqlite::Result<(i64, CatalogProduct)> {
    let product_type: String = row.get("product_type")?;
    let product_type = ProductType::from_db_str(&product_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unknown product type '{}'", product_type).into(),
        )
    })?;

    let product = CatalogProduct {
        sku: row.get("sku")?,
        name: row.get("name")?,
        price: row.get("price")?,
        product_type,
        attribute_set_id: row.get("attribute_set_id")?,
        inventory: InventoryDescriptor {
            qty: row.get("qty")?,
            is_in_stock: row.get("is_in_stock")?,
            manage_stock: row.get("manage_stock")?,
        },
        description: row.get("description")?,
        category_ids: Vec::new(),
        year: row.get("year")?,
        vote_average: row.get("vote_average")?,
        genre: row.get("genre")?,
        actors: row.get("actors")?,
        director: row.get("director")?,
        producer: row.get("producer")?,
    };
    Ok((row.get("rowid")?, product))
}

impl SqliteCatalogStore {
    /// Open (or create) the catalog database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open catalog database {:?}", db_path))?;

        open_schema(&conn)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let product_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM products", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened catalog: {} products", product_count);

        Ok(SqliteCatalogStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn get_category_ids(conn: &Connection, product_rowid: i64) -> Result<Vec<u32>> {
        let mut stmt = conn.prepare(
            "SELECT category_id FROM product_categories WHERE product_rowid = ?1 ORDER BY rowid",
        )?;
        let ids = stmt
            .query_map(params![product_rowid], |r| r.get(0))?
            .collect::<rusqlite::Result<Vec<u32>>>()?;
        Ok(ids)
    }

    fn insert_product(conn: &Connection, product: &CatalogProduct) -> Result<()> {
        conn.execute(
            "INSERT INTO products (sku, name, price, product_type, attribute_set_id, qty, is_in_stock, manage_stock,
                description, year, vote_average, genre, actors, director, producer)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                &product.sku,
                &product.name,
                product.price,
                product.product_type.to_db_str(),
                product.attribute_set_id,
                product.inventory.qty,
                product.inventory.is_in_stock,
                product.inventory.manage_stock,
                &product.description,
                &product.year,
                product.vote_average,
                &product.genre,
                &product.actors,
                &product.director,
                &product.producer,
            ],
        )?;

        let product_rowid = conn.last_insert_rowid();
        for category_id in &product.category_ids {
            conn.execute(
                "INSERT OR IGNORE INTO product_categories (product_rowid, category_id) VALUES (?1, ?2)",
                params![product_rowid, category_id],
            )?;
        }
        Ok(())
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn find_by_sku(&self, sku: &str) -> Result<Option<CatalogProduct>> {
        let conn = self.conn.lock().unwrap();
        let found = conn
            .query_row(
                "SELECT * FROM products WHERE sku = ?1",
                params![sku],
                product_from_row,
            )
            .optional()
            .with_context(|| format!("Failed to look up product {}", sku))?;

        match found {
            Some((rowid, mut product)) => {
                product.category_ids = Self::get_category_ids(&conn, rowid)?;
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    fn save(&self, product: &CatalogProduct) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("BEGIN IMMEDIATE", [])?;

        let result = Self::insert_product(&conn, product)
            .and_then(|()| conn.execute("COMMIT", []).map(|_| ()).map_err(Into::into));

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                let _ = conn.execute("ROLLBACK", []);
                Err(e.context(format!("Failed to save product {}", product.sku)))
            }
        }
    }

    fn products_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM products", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}
