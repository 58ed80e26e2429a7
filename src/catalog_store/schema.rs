//! SQLite schema definitions for the product catalog database.
//!
//! Products are keyed by an integer rowid, with the SKU as a unique text
//! column used for lookups. Category membership lives in a junction table.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

/// Products table - one row per catalog product
const PRODUCTS_TABLE: Table = Table {
    name: "products",
    columns: &[
        sqlite_column!("rowid", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("sku", &SqlType::Text, non_null = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("price", &SqlType::Real, non_null = true),
        sqlite_column!("product_type", &SqlType::Text, non_null = true), // 'simple', 'virtual'
        sqlite_column!("attribute_set_id", &SqlType::Integer, non_null = true),
        sqlite_column!("qty", &SqlType::Integer, non_null = true),
        sqlite_column!("is_in_stock", &SqlType::Integer, non_null = true),
        sqlite_column!("manage_stock", &SqlType::Integer, non_null = true),
        sqlite_column!("description", &SqlType::Text, non_null = true),
        sqlite_column!("year", &SqlType::Text),
        sqlite_column!("vote_average", &SqlType::Real),
        sqlite_column!("genre", &SqlType::Text, non_null = true),
        sqlite_column!("actors", &SqlType::Text, non_null = true),
        sqlite_column!("director", &SqlType::Text, non_null = true),
        sqlite_column!("producer", &SqlType::Text, non_null = true),
    ],
    indices: &[("idx_products_sku", "sku")],
    unique_constraints: &[&["sku"]],
};

/// Product <-> Category relationship
const PRODUCT_CATEGORIES_TABLE: Table = Table {
    name: "product_categories",
    columns: &[
        sqlite_column!(
            "product_rowid",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ForeignKey {
                foreign_table: "products",
                foreign_column: "rowid",
                on_delete: ForeignKeyOnChange::Cascade,
            })
        ),
        sqlite_column!("category_id", &SqlType::Integer, non_null = true),
    ],
    indices: &[("idx_product_categories_product", "product_rowid")],
    unique_constraints: &[&["product_rowid", "category_id"]],
};

pub const CATALOG_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[PRODUCTS_TABLE, PRODUCT_CATEGORIES_TABLE],
}];
