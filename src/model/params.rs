use std::path::PathBuf;

use serde::Serialize;

use crate::error::MaxDiffError;
use crate::model::item::Catalog;

pub const MAX_RECORDS: u64 = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationParams {
    pub respondents: u32,
    pub sets_per_respondent: u32,
    pub items_per_set: usize,
    pub seed: u64,
}

impl SimulationParams {
    pub fn default_v1() -> Self {
        Self {
            respondents: 20,
            sets_per_respondent: 5,
            items_per_set: 4,
            seed: 42,
        }
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<(), MaxDiffError> {
        if self.respondents == 0 {
            return Err(MaxDiffError::config("respondents must be > 0"));
        }
        if self.sets_per_respondent == 0 {
            return Err(MaxDiffError::config("sets per respondent must be > 0"));
        }
        let total = u64::from(self.respondents) * u64::from(self.sets_per_respondent);
        if total > MAX_RECORDS {
            return Err(MaxDiffError::config(format!(
                "respondents x sets per respondent ({total}) exceeds the {MAX_RECORDS} record limit"
            )));
        }
        if self.items_per_set < 2 {
            return Err(MaxDiffError::config(format!(
                "items per set must be >= 2 (got {})",
                self.items_per_set
            )));
        }
        if self.items_per_set > catalog.len() {
            return Err(MaxDiffError::config(format!(
                "items per set ({}) exceeds catalog size ({})",
                self.items_per_set,
                catalog.len()
            )));
        }
        Ok(())
    }

    pub fn expected_records(&self) -> usize {
        (self.respondents as usize).saturating_mul(self.sets_per_respondent as usize)
    }
}

#[derive(Debug, Clone)]
pub struct ReportParams {
    pub out_dir: PathBuf,
    pub render_plots: bool,
}
