use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Crowd demographic percentages for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicBreakdown {
    pub gender: GenderSplit,
    /// Age-band label (e.g. "20s", "30s") to share of the zone's crowd, in percent.
    pub age_groups: HashMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderSplit {
    pub male: f64,
    pub female: f64,
}

impl DemographicBreakdown {
    /// The age band holding the largest share, if any bands are present.
    /// Ties break toward the lexically smaller label so the answer is stable.
    pub fn dominant_age_group(&self) -> Option<(&str, f64)> {
        self.age_groups
            .iter()
            .map(|(label, share)| (label.as_str(), *share))
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.0.cmp(a.0))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_age_group_picks_largest_share() {
        let breakdown = DemographicBreakdown {
            gender: GenderSplit {
                male: 55.0,
                female: 45.0,
            },
            age_groups: HashMap::from([
                ("10s".to_string(), 8.0),
                ("20s".to_string(), 34.0),
                ("30s".to_string(), 28.0),
                ("40s".to_string(), 30.0),
            ]),
        };
        assert_eq!(breakdown.dominant_age_group(), Some(("20s", 34.0)));
    }

    #[test]
    fn dominant_age_group_empty() {
        let breakdown = DemographicBreakdown {
            gender: GenderSplit {
                male: 50.0,
                female: 50.0,
            },
            age_groups: HashMap::new(),
        };
        assert_eq!(breakdown.dominant_age_group(), None);
    }
}
