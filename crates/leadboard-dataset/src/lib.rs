pub mod error;
pub mod paths;

use crate::error::{DatasetError, Result};
use leadboard_core::Lead;
use std::fs;
use std::path::Path;

/// Leads loaded once and only handed out by shared reference.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    leads: Vec<Lead>,
}

impl Dataset {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let leads: Vec<Lead> =
            serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_leads(leads)
    }

    /// Rejects the whole set when any lead is missing its company.
    pub fn from_leads(leads: Vec<Lead>) -> Result<Self> {
        for (index, lead) in leads.iter().enumerate() {
            lead.validate()
                .map_err(|source| DatasetError::InvalidLead { index, source })?;
        }
        Ok(Self { leads })
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Case-insensitive exact match on the company name; first hit wins.
    pub fn find_company(&self, company: &str) -> Option<&Lead> {
        let wanted = company.trim().to_lowercase();
        self.leads
            .iter()
            .find(|lead| lead.company.trim().to_lowercase() == wanted)
    }
}
