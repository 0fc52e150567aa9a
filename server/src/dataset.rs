//! Crop by-product and company datasets.
//!
//! DESIGN
//! ======
//! Both datasets are JSON arrays loaded once at start-up and shared read-only
//! between requests. A copy of each is compiled into the binary so the
//! service runs without any files on disk; `BYPRODUCTS_PATH` and
//! `COMPANIES_PATH` replace either one.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ServerConfig;

const BUNDLED_BYPRODUCTS: &str = include_str!("../data/byproducts.json");
const BUNDLED_COMPANIES: &str = include_str!("../data/companies.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Industry domains that can use a crop's by-products.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CropByproducts {
    pub crop: String,
    pub useful_domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub company_name: String,
    pub address: String,
    pub district: String,
    pub domain: String,
    pub status: Option<String>,
    pub distance: Option<f64>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub crops: Vec<CropByproducts>,
    pub companies: Vec<Company>,
}

impl Datasets {
    /// The datasets compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] if a bundled file is malformed.
    pub fn bundled() -> Result<Self, DatasetError> {
        Ok(Self {
            crops: parse(BUNDLED_BYPRODUCTS, "bundled byproducts")?,
            companies: parse(BUNDLED_COMPANIES, "bundled companies")?,
        })
    }

    /// Load the datasets named by `config`, bundled ones where unset.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] when a configured file cannot be read or parsed.
    pub fn load(config: &ServerConfig) -> Result<Self, DatasetError> {
        let bundled = Self::bundled()?;
        let crops = match &config.byproducts_path {
            Some(path) => read(path)?,
            None => bundled.crops,
        };
        let companies = match &config.companies_path {
            Some(path) => read(path)?,
            None => bundled.companies,
        };
        Ok(Self { crops, companies })
    }

    /// Case-insensitive crop lookup.
    #[must_use]
    pub fn crop(&self, name: &str) -> Option<&CropByproducts> {
        let name = name.trim();
        self.crops.iter().find(|c| c.crop.eq_ignore_ascii_case(name))
    }
}

fn parse<T: serde::de::DeserializeOwned>(raw: &str, origin: &str) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(raw).map_err(|source| DatasetError::Parse { origin: origin.to_owned(), source })
}

fn read<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| DatasetError::Read { path: path.to_path_buf(), source })?;
    parse(&raw, &path.display().to_string())
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
