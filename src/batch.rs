use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::BATCH_ID_FORMAT;
use crate::error::ConfigError;

/// One table export to stage, e.g. `olist_orders_dataset` + `csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub table_name: String,
    pub ext: String,
}

impl SourceFile {
    pub fn new(table_name: &str, ext: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            ext: ext.to_string(),
        }
    }

    /// Split a file name like `olist_orders_dataset.csv` on its last dot.
    pub fn parse(file_name: &str) -> Result<Self, ConfigError> {
        match file_name.rsplit_once('.') {
            Some((table, ext)) if !table.is_empty() && !ext.is_empty() => Ok(Self::new(table, ext)),
            _ => Err(ConfigError::InvalidTable(file_name.to_string())),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.table_name, self.ext)
    }
}

/// Timestamp shared by every file of one run, `YYYYMMDD_HHMMSS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchId(String);

impl BatchId {
    /// Local wall-clock time, no timezone normalisation.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(at: NaiveDateTime) -> Self {
        BatchId(at.format(BATCH_ID_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Downstream crawlers scan this exact layout.
pub fn destination_key(
    raw_zone: &str,
    source_prefix: &str,
    file: &SourceFile,
    batch_id: &BatchId,
) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        raw_zone,
        source_prefix,
        file.table_name,
        batch_id,
        file.file_name()
    )
}

pub fn local_path(dir: &Path, file: &SourceFile) -> PathBuf {
    dir.join(file.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn batch_id_is_zero_padded_to_the_second() {
        assert_eq!(BatchId::from_datetime(at(2024, 3, 15, 10, 15, 0)).as_str(), "20240315_101500");
        assert_eq!(BatchId::from_datetime(at(2025, 1, 2, 3, 4, 5)).to_string(), "20250102_030405");
    }

    #[test]
    fn batch_id_now_has_expected_shape() {
        let id = BatchId::now();
        let s = id.as_str();
        assert_eq!(s.len(), 15);
        assert_eq!(&s[8..9], "_");
        assert!(s.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn destination_key_layout() {
        let batch = BatchId::from_datetime(at(2024, 3, 15, 10, 15, 0));
        let orders = SourceFile::new("orders", "csv");
        assert_eq!(
            destination_key("raw", "olist", &orders, &batch),
            "raw/olist/orders/20240315_101500/orders.csv"
        );
        // same inputs, same key
        assert_eq!(
            destination_key("raw", "olist", &orders, &batch),
            destination_key("raw", "olist", &orders.clone(), &batch.clone())
        );
    }

    #[test]
    fn parse_splits_on_last_dot() {
        assert_eq!(
            SourceFile::parse("olist_orders_dataset.csv").unwrap(),
            SourceFile::new("olist_orders_dataset", "csv")
        );
        assert_eq!(
            SourceFile::parse("export.2024.csv").unwrap(),
            SourceFile::new("export.2024", "csv")
        );
        assert_eq!(SourceFile::parse("archive.csv.gz").unwrap().ext, "gz");
    }

    #[test]
    fn parse_rejects_names_without_extension() {
        for bad in ["orders", "orders.", ".csv", ""] {
            assert!(matches!(
                SourceFile::parse(bad),
                Err(ConfigError::InvalidTable(name)) if name == bad
            ));
        }
    }

    #[test]
    fn local_path_joins_dir_and_file_name() {
        let file = SourceFile::new("olist_sellers_dataset", "csv");
        assert_eq!(
            local_path(Path::new("./src_data/"), &file),
            Path::new("./src_data/olist_sellers_dataset.csv")
        );
    }
}
