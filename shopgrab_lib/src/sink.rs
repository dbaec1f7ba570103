//! Record Sink: serializes harvested records to a CSV file.

use std::path::Path;

use crate::record::ProductRecord;

/// Errors surfaced while writing the tabular output. The entry point treats
/// these as non-fatal for the run.
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes records as UTF-8 CSV with a header row, in insertion order.
///
/// An empty result set is a logged no-op: no file is created.
pub fn write_csv(records: &[ProductRecord], destination: &Path) -> Result<(), SinkError> {
    if records.is_empty() {
        tracing::info!("no products to save");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(destination)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(
        "saved {} products to {}",
        records.len(),
        destination.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SENTINEL;

    fn sample(title: &str) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            price: "$19.99".to_string(),
            rating: "4.2".to_string(),
            image_filename: SENTINEL.to_string(),
        }
    }

    #[test]
    fn empty_result_set_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("products.csv");

        write_csv(&[], &destination).unwrap();
        assert!(!destination.exists());
    }

    #[test]
    fn rows_follow_insertion_order_under_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("products.csv");

        write_csv(&[sample("first"), sample("second")], &destination).unwrap();

        let contents = std::fs::read_to_string(&destination).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "title,price,rating,image_filename");
        assert!(lines[1].starts_with("first,"));
        assert!(lines[2].starts_with("second,"));
    }
}
