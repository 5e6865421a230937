// src/config/catalog.rs
//
// Ordered, read-only collection of vessel profiles

use std::fs;
use std::path::Path;

use log::info;

use super::profiles::{VesselClass, VesselProfile};
use crate::error::{Result, SonarError};

/// Insertion-ordered catalog with case-insensitively unique names.
///
/// Built once and only read afterwards; share it by reference (or `Arc`)
/// across threads without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselCatalog {
    profiles: Vec<VesselProfile>,
}

impl VesselCatalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new(profiles: Vec<VesselProfile>) -> Result<Self> {
        for (i, profile) in profiles.iter().enumerate() {
            if profiles[..i].iter().any(|p| p.matches_name(profile.name())) {
                return Err(SonarError::DuplicateVessel {
                    name: profile.name().to_string(),
                });
            }
        }
        Ok(Self { profiles })
    }

    /// Catalog of every reference class
    pub fn standard() -> Self {
        let profiles = VesselClass::all().iter().map(|c| c.profile()).collect();
        Self { profiles }
    }

    /// Parse a JSON array of profiles
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profiles: Vec<VesselProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} vessel profile(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.profiles)?)
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<&VesselProfile> {
        self.profiles.iter().find(|p| p.matches_name(name))
    }

    /// Case-insensitive lookup that reports every valid name on a miss
    pub fn get(&self, name: &str) -> Result<&VesselProfile> {
        self.find(name).ok_or_else(|| SonarError::UnknownVessel {
            name: name.to_string(),
            available: self.names(),
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VesselProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a VesselCatalog {
    type Item = &'a VesselProfile;
    type IntoIter = std::slice::Iter<'a, VesselProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
