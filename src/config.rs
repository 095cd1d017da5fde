use std::env;
use std::path::PathBuf;

use crate::batch::SourceFile;
use crate::error::ConfigError;

// Defaults for the Olist landing run //

pub const BUCKET: &str = "cxm-medtech-landing-ssen27";
pub const LOCAL_DATA_PATH: &str = "./src_data/";
pub const SOURCE_PREFIX: &str = "olist";
pub const RAW_ZONE: &str = "raw";
pub const BATCH_ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `(table_name, ext)` in upload order.
pub const TABLES: [(&str, &str); 9] = [
    ("olist_orders_dataset", "csv"),
    ("olist_customers_dataset", "csv"),
    ("olist_order_items_dataset", "csv"),
    ("olist_order_reviews_dataset", "csv"),
    ("olist_products_dataset", "csv"),
    ("olist_sellers_dataset", "csv"),
    ("olist_order_payments_dataset", "csv"),
    ("product_category_name_translation", "csv"),
    ("olist_geolocation_dataset", "csv"),
];

/// Everything one run needs. Built once in `main`, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination bucket.
    pub bucket: String,

    /// Directory holding the CSV exports.
    pub local_data_path: PathBuf,

    /// Namespace of the data source under the raw zone (`olist`).
    pub source_prefix: String,

    pub raw_zone: String,

    /// Upload order is this order.
    pub tables: Vec<SourceFile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: BUCKET.to_string(),
            local_data_path: PathBuf::from(LOCAL_DATA_PATH),
            source_prefix: SOURCE_PREFIX.to_string(),
            raw_zone: RAW_ZONE.to_string(),
            tables: TABLES
                .iter()
                .map(|(table, ext)| SourceFile::new(table, ext))
                .collect(),
        }
    }
}

impl Config {
    /// Load overrides from the environment (and `.env`), falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let tables = match lookup("INGEST_TABLES") {
            Some(list) => parse_tables(&list)?,
            None => default.tables,
        };

        Ok(Self {
            bucket: var("INGEST_BUCKET").unwrap_or(default.bucket),
            local_data_path: var("INGEST_LOCAL_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.local_data_path),
            source_prefix: var("INGEST_SOURCE_PREFIX").unwrap_or(default.source_prefix),
            raw_zone: default.raw_zone,
            tables,
        })
    }
}

/// Comma-separated file names. Blank entries are skipped.
pub fn parse_tables(list: &str) -> Result<Vec<SourceFile>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(SourceFile::parse)
        .collect()
}
