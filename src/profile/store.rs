//! CSV persistence for reference profiles
//!
//! Format: header `key,M,S`, one row per enrollment repetition. Floats are
//! written in shortest round-trip form, so a reload reproduces them exactly.

use crate::error::{AuthError, Result};
use crate::profile::{ProfileRecord, ReferenceProfile};
use log::info;
use std::path::{Path, PathBuf};

/// Default profile file name
pub const DEFAULT_PROFILE_FILE: &str = "etalons.csv";

/// Reads and writes one reference profile file
#[derive(Clone, Debug)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProfileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the stored profile
    pub fn save(&self, profile: &ReferenceProfile) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in profile.records() {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|source| AuthError::Storage {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "saved {} records for a {}-character key to {}",
            profile.len(),
            profile.key().chars().count(),
            self.path.display()
        );
        Ok(())
    }

    /// Load the stored profile
    pub fn load(&self) -> Result<ReferenceProfile> {
        if !self.exists() {
            return Err(AuthError::MissingProfile(self.path.clone()));
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize::<ProfileRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let profile = ReferenceProfile::new(records)?;

        info!(
            "loaded {} records from {}",
            profile.len(),
            self.path.display()
        );
        Ok(profile)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        ProfileStore::new(DEFAULT_PROFILE_FILE)
    }
}
