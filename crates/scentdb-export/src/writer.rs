//! JSON documents for the five catalog collections.
//!
//! Each collection lands in its own file as a compact JSON array. Files are
//! written independently: one failed write is logged and recorded, and the
//! remaining collections are still attempted.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use scentdb_core::CatalogDataset;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ExportError;

const BRANDS_FILE: &str = "brands.json";
const IMAGES_FILE: &str = "images.json";
const PRODUCTS_FILE: &str = "products.json";
const SIZES_FILE: &str = "sizes.json";
const QUANTITIES_FILE: &str = "quantities.json";

/// Output file names, in write order.
pub const COLLECTION_FILES: [&str; 5] = [
    BRANDS_FILE,
    IMAGES_FILE,
    PRODUCTS_FILE,
    SIZES_FILE,
    QUANTITIES_FILE,
];

/// What a [`write_dataset`] call managed to persist.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Files written, with their row counts.
    pub written: Vec<(PathBuf, usize)>,
    pub failures: Vec<ExportError>,
}

impl ExportSummary {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, result: Result<(PathBuf, usize), ExportError>) {
        match result {
            Ok(written) => self.written.push(written),
            Err(e) => {
                tracing::error!(error = %e, "collection export failed");
                self.failures.push(e);
            }
        }
    }
}

/// Writes every collection of `dataset` under `dir`, creating it if needed.
///
/// Never returns early on a failed file; inspect
/// [`ExportSummary::failures`] for what went wrong.
pub fn write_dataset(dir: &Path, dataset: &CatalogDataset) -> ExportSummary {
    let mut summary = ExportSummary::default();

    if let Err(source) = fs::create_dir_all(dir) {
        summary.record(Err(ExportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }));
        return summary;
    }

    summary.record(write_collection(dir, BRANDS_FILE, &dataset.brands));
    summary.record(write_collection(dir, IMAGES_FILE, &dataset.images));
    summary.record(write_collection(dir, PRODUCTS_FILE, &dataset.products));
    summary.record(write_collection(dir, SIZES_FILE, &dataset.sizes));
    summary.record(write_collection(dir, QUANTITIES_FILE, &dataset.quantities));

    tracing::info!(
        dir = %dir.display(),
        written = summary.written.len(),
        failed = summary.failures.len(),
        "dataset export finished"
    );
    summary
}

fn write_collection<T: Serialize>(
    dir: &Path,
    file_name: &str,
    rows: &[T],
) -> Result<(PathBuf, usize), ExportError> {
    let path = dir.join(file_name);
    let write_err = |source| ExportError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, rows).map_err(|source| ExportError::Serialize {
        path: path.clone(),
        source,
    })?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "collection written");
    Ok((path, rows.len()))
}

/// Reads a dataset previously written by [`write_dataset`].
///
/// # Errors
///
/// Returns [`ExportError::Read`] when a collection file is missing or
/// unreadable, and [`ExportError::Parse`] when it is not the expected JSON.
pub fn read_dataset(dir: &Path) -> Result<CatalogDataset, ExportError> {
    Ok(CatalogDataset {
        brands: read_collection(dir, BRANDS_FILE)?,
        images: read_collection(dir, IMAGES_FILE)?,
        products: read_collection(dir, PRODUCTS_FILE)?,
        sizes: read_collection(dir, SIZES_FILE)?,
        quantities: read_collection(dir, QUANTITIES_FILE)?,
    })
}

fn read_collection<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, ExportError> {
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|source| ExportError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use scentdb_core::{Brand, Image, Product, Quantity, Size};

    use super::*;

    fn sample_dataset() -> CatalogDataset {
        CatalogDataset {
            brands: vec![Brand {
                id: 1000,
                name: Some("Chloé".to_string()),
                slug: Some("chlo".to_string()),
            }],
            images: vec![Image {
                id: 1000,
                product_id: None,
                category_id: None,
                brand_id: Some(1000),
                path: "https://cdn.example.com/chloe.png".to_string(),
                main: true,
            }],
            products: vec![Product {
                id: 1000,
                name: Some("Nomade EDP 75ml".to_string()),
                slug: "nomade-edp-75ml-p-1000".to_string(),
                description: Some("<p>Oakmoss</p>".to_string()),
                brand_id: 1000,
                concentration_id: 50,
                categories: vec![103, 117],
            }],
            sizes: vec![Size {
                id: 100,
                name: "75 ml".to_string(),
            }],
            quantities: vec![Quantity {
                id: 100,
                product_id: 1000,
                size_id: 100,
                quantity: 12,
                price: 210.5,
            }],
        }
    }

    #[test]
    fn writes_all_five_files() {
        let dir = tempfile::tempdir().unwrap();
        let summary = write_dataset(dir.path(), &sample_dataset());

        assert!(summary.is_complete(), "{:?}", summary.failures);
        assert_eq!(summary.written.len(), 5);
        for name in COLLECTION_FILES {
            assert!(dir.path().join(name).is_file(), "{name} missing");
        }
    }

    #[test]
    fn files_are_compact_arrays_with_null_keys() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), &sample_dataset());

        let images = fs::read_to_string(dir.path().join(IMAGES_FILE)).unwrap();
        assert!(!images.contains('\n'));
        assert!(images.starts_with('['));
        assert!(images.contains(r#""product_id":null"#));
        assert!(images.contains(r#""category_id":null"#));
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("run-1");
        let summary = write_dataset(&nested, &CatalogDataset::default());

        assert!(summary.is_complete());
        let brands = fs::read_to_string(nested.join(BRANDS_FILE)).unwrap();
        assert_eq!(brands, "[]");
    }

    #[test]
    fn one_failed_file_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(PRODUCTS_FILE)).unwrap();

        let summary = write_dataset(dir.path(), &sample_dataset());

        assert_eq!(summary.failures.len(), 1);
        assert!(matches!(
            &summary.failures[0],
            ExportError::Write { path, .. } if path.ends_with(PRODUCTS_FILE)
        ));
        assert_eq!(summary.written.len(), 4);
        assert!(dir.path().join(QUANTITIES_FILE).is_file());
    }

    #[test]
    fn uncreatable_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let summary = write_dataset(&blocker.join("out"), &sample_dataset());

        assert!(summary.written.is_empty());
        assert!(matches!(
            summary.failures.as_slice(),
            [ExportError::CreateDir { .. }]
        ));
    }

    #[test]
    fn read_back_matches_written_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = sample_dataset();
        write_dataset(dir.path(), &dataset);

        assert_eq!(read_dataset(dir.path()).unwrap(), dataset);
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dataset(dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Read { ref path, .. } if path.ends_with(BRANDS_FILE)));
    }

    #[test]
    fn read_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), &sample_dataset());
        fs::write(dir.path().join(SIZES_FILE), "{not json").unwrap();

        let err = read_dataset(dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Parse { ref path, .. } if path.ends_with(SIZES_FILE)));
    }
}
