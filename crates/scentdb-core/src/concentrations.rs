use std::collections::HashSet;
use std::path::Path;

use crate::catalog::Concentration;
use crate::ConfigError;

/// Load and validate the concentration reference table from a JSON file.
///
/// The file is an array of `{ "id": .., "name": .. }` objects. Row order is
/// preserved: it decides which name wins when several match a product name.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_concentrations(path: &Path) -> Result<Vec<Concentration>, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::ConcentrationsFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let concentrations: Vec<Concentration> =
        serde_json::from_str(&content).map_err(ConfigError::ConcentrationsFileParse)?;

    validate_concentrations(&concentrations)?;

    Ok(concentrations)
}

fn validate_concentrations(concentrations: &[Concentration]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for concentration in concentrations {
        if concentration.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "concentration {} has an empty name",
                concentration.id
            )));
        }

        if !seen_ids.insert(concentration.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate concentration id: {}",
                concentration.id
            )));
        }
    }

    Ok(())
}
