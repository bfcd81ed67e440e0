use serde::{Deserialize, Serialize};

use crate::models::ZoneName;

/// Stable identifier for a suggestion, derived from its content so that
/// UI selection state survives recomputation of an unchanged snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuggestionId(String);

impl SuggestionId {
    pub fn new(from: &str, to: &str, staff_count: u32) -> Self {
        SuggestionId(format!("{}->{}:{}", from, to, staff_count))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A proposed transfer of staff from one zone to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSuggestion {
    pub id: SuggestionId,
    pub from_zone: ZoneName,
    pub to_zone: ZoneName,
    pub staff_count: u32,
    pub reason: String,
}

impl TransferSuggestion {
    pub fn new(from_zone: ZoneName, to_zone: ZoneName, staff_count: u32, reason: String) -> Self {
        Self {
            id: SuggestionId::new(&from_zone, &to_zone, staff_count),
            from_zone,
            to_zone,
            staff_count,
            reason,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> String {
        format!(
            "Move {} staff from {} to {}",
            self.staff_count, self.from_zone, self.to_zone
        )
    }
}

/// How many suggestions the dashboard shows before the "see all" fold.
pub const DISPLAY_LIMIT: usize = 3;

/// A complete set of transfer suggestions for one snapshot, in the order
/// the recommender produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferPlan {
    pub suggestions: Vec<TransferSuggestion>,
    pub metadata: PlanMetadata,
}

impl TransferPlan {
    pub fn new(suggestions: Vec<TransferSuggestion>) -> Self {
        Self {
            suggestions,
            metadata: PlanMetadata::default(),
        }
    }

    /// The leading suggestions for UI presentation.
    pub fn top(&self, limit: usize) -> &[TransferSuggestion] {
        &self.suggestions[..self.suggestions.len().min(limit)]
    }

    /// The default UI prefix of [`DISPLAY_LIMIT`] suggestions.
    pub fn display_prefix(&self) -> &[TransferSuggestion] {
        self.top(DISPLAY_LIMIT)
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn total_staff_moved(&self) -> u32 {
        self.suggestions.iter().map(|s| s.staff_count).sum()
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            suggestion_count: self.suggestions.len(),
            total_staff_moved: self.total_staff_moved(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for PlanMetadata {
    fn default() -> Self {
        Self {
            created_at: Some(chrono::Utc::now()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanSummary {
    pub suggestion_count: usize,
    pub total_staff_moved: u32,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Suggestions: {}, Staff Moved: {}",
            self.suggestion_count, self.total_staff_moved
        )
    }
}
