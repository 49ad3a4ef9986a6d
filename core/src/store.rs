//! YAML persistence for generated schemas.
//!
//! # Design
//! Each schema lives in its own `<identifier>.yaml` file. Provider tests and
//! consumer mocks go to separate directories described by
//! [`ContractLayout`]. Every function returns a `ContractError` carrying the
//! offending path; batch callers report it and move on to the next file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ContractError;
use crate::schema::Schema;
use crate::validation::Catalog;

pub const DEFAULT_PROVIDER_DIR: &str = "ecom-service/v1/tests/contracts/provider";
pub const DEFAULT_CONSUMER_DIR: &str = "ecom-service/v1/tests/contracts/consumer";

/// Where provider and consumer contracts are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractLayout {
    pub provider_dir: PathBuf,
    pub consumer_dir: PathBuf,
}

impl Default for ContractLayout {
    fn default() -> Self {
        Self {
            provider_dir: PathBuf::from(DEFAULT_PROVIDER_DIR),
            consumer_dir: PathBuf::from(DEFAULT_CONSUMER_DIR),
        }
    }
}

/// Serialize `schema` to `dir/file_name`, creating `dir` when missing.
pub fn save_schema(schema: &Schema, dir: &Path, file_name: &str) -> Result<PathBuf, ContractError> {
    let data = serde_yaml::to_string(schema)?;

    fs::create_dir_all(dir).map_err(|source| ContractError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    fs::write(&path, data).map_err(|source| ContractError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "saved schema");
    Ok(path)
}

pub fn load_schema(path: &Path) -> Result<Schema, ContractError> {
    let raw = fs::read_to_string(path).map_err(|source| ContractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ContractError::DeserializationError {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.yaml` / `*.yml` file in `dir`, keyed by file stem.
///
/// Two files with the same stem are an error.
pub fn load_catalog(dir: &Path) -> Result<Catalog, ContractError> {
    let entries = fs::read_dir(dir).map_err(|source| ContractError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut catalog = Catalog::new();
    for entry in entries {
        let path = entry
            .map_err(|source| ContractError::Read {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if !is_yaml || !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        if catalog.contains_key(&stem) {
            return Err(ContractError::DuplicateSchema {
                name: stem,
                dir: dir.to_path_buf(),
            });
        }
        catalog.insert(stem, load_schema(&path)?);
    }

    tracing::debug!(dir = %dir.display(), schemas = catalog.len(), "loaded catalog");
    Ok(catalog)
}
