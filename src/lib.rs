// Venue Staffing Rebalancer Library
// Staff transfer suggestions and crowd density classification for venue
// operations dashboards.

pub mod density;
pub mod models;
pub mod recommender;
pub mod suggestions;

use std::collections::HashSet;

pub use density::{heat_level, relative_heat_level, DensityBand};
pub use models::{
    DemographicBreakdown, GenderSplit, SectionDetail, StaffingStatus, VenueSnapshot, Zone,
};
pub use recommender::{apply_selection, compute_suggestions};
pub use suggestions::{SuggestionId, TransferPlan, TransferSuggestion};

/// Main entry point for computing and applying staff transfer suggestions.
pub struct Recommender {
    display_limit: usize,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            display_limit: suggestions::DISPLAY_LIMIT,
        }
    }

    /// Override how many suggestions `display_suggestions` exposes.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Compute the full transfer plan for the given zone roster.
    pub fn suggest(&self, zones: &[Zone]) -> TransferPlan {
        TransferPlan::new(recommender::compute_suggestions(zones))
    }

    /// The bounded prefix of a plan shown on the dashboard.
    pub fn display_suggestions<'a>(&self, plan: &'a TransferPlan) -> &'a [TransferSuggestion] {
        plan.top(self.display_limit)
    }

    /// Apply the selected suggestions, producing an updated zone roster.
    pub fn apply(
        &self,
        zones: &[Zone],
        plan: &TransferPlan,
        selected: &HashSet<SuggestionId>,
    ) -> Result<Vec<Zone>, RecommenderError> {
        recommender::apply_selection(zones, &plan.suggestions, selected)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecommenderError {
    #[error("no suggestions selected; select at least one transfer before applying")]
    EmptySelection,
}
