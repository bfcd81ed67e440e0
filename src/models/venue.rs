use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DemographicBreakdown, SectionDetail, Zone, ZoneId};

/// Represents one snapshot of the venue as provided by the data source.
/// Zones and sections keep the order the source reported them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSnapshot {
    pub total_capacity: u32,
    pub total_occupancy: u32,
    pub total_staff: u32,
    pub recommended_total_staff: u32,
    pub zones: Vec<Zone>,
    pub sections: Vec<SectionDetail>,
    pub demographics: HashMap<ZoneId, DemographicBreakdown>,
    pub last_updated: DateTime<Utc>,
}

impl VenueSnapshot {
    pub fn get_zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn get_zone_by_name(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    pub fn overstaffed_zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(|z| z.is_overstaffed())
    }

    pub fn understaffed_zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(|z| z.is_understaffed())
    }

    /// Venue-wide occupancy as a percentage of total capacity.
    pub fn occupancy_percent(&self) -> f64 {
        if self.total_capacity == 0 {
            return 0.0;
        }
        self.total_occupancy as f64 / self.total_capacity as f64 * 100.0
    }

    /// How many staff the venue is short of the recommended total.
    /// Zero when staffing meets or exceeds the recommendation.
    pub fn staffing_deficit(&self) -> u32 {
        self.recommended_total_staff.saturating_sub(self.total_staff)
    }

    /// Staff actually placed across zones. May differ from `total_staff`
    /// when the source counts roaming staff outside any zone.
    pub fn zone_staff_total(&self) -> u32 {
        self.zones.iter().map(|z| z.staff_count).sum()
    }

    pub fn demographics_for(&self, zone_id: &str) -> Option<&DemographicBreakdown> {
        self.demographics.get(zone_id)
    }

    /// Section records belonging to the given zone, in source order.
    pub fn sections_in_zone(&self, zone_id: &str) -> Vec<&SectionDetail> {
        let Some(zone) = self.get_zone(zone_id) else {
            return Vec::new();
        };
        self.sections
            .iter()
            .filter(|s| zone.sections.contains(&s.section_number))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::DensityBand;

    fn zone(id: &str, sections: &[&str], staff: u32, recommended: u32) -> Zone {
        Zone {
            id: id.into(),
            name: id.to_uppercase(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
            total_seats: 1000,
            current_occupancy: 700,
            density: DensityBand::Moderate,
            staff_count: staff,
            recommended_staff: recommended,
        }
    }

    fn section(number: &str) -> SectionDetail {
        SectionDetail {
            section_number: number.into(),
            total_seats: 200,
            current_occupancy: 150,
            density_percent: 75.0,
            staff_count: 2,
        }
    }

    fn snapshot() -> VenueSnapshot {
        VenueSnapshot {
            total_capacity: 23750,
            total_occupancy: 18200,
            total_staff: 100,
            recommended_total_staff: 105,
            zones: vec![
                zone("infield", &["101", "102"], 32, 35),
                zone("outfield", &["401", "402"], 12, 8),
            ],
            sections: vec![section("101"), section("102"), section("401")],
            demographics: HashMap::new(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn zone_lookup_by_id_and_name() {
        let snap = snapshot();
        assert!(snap.get_zone("infield").is_some());
        assert!(snap.get_zone_by_name("OUTFIELD").is_some());
        assert!(snap.get_zone("bleachers").is_none());
    }

    #[test]
    fn aggregates() {
        let snap = snapshot();
        assert!((snap.occupancy_percent() - 76.63).abs() < 0.01);
        assert_eq!(snap.staffing_deficit(), 5);
        assert_eq!(snap.zone_staff_total(), 44);
    }

    #[test]
    fn sections_grouped_by_zone() {
        let snap = snapshot();
        let infield: Vec<_> = snap
            .sections_in_zone("infield")
            .iter()
            .map(|s| s.section_number.clone())
            .collect();
        assert_eq!(infield, vec!["101", "102"]);
        assert!(snap.sections_in_zone("missing").is_empty());
    }

    #[test]
    fn overstaffed_and_understaffed_partitions() {
        let snap = snapshot();
        let over: Vec<_> = snap.overstaffed_zones().map(|z| z.id.clone()).collect();
        let under: Vec<_> = snap.understaffed_zones().map(|z| z.id.clone()).collect();
        assert_eq!(over, vec!["outfield"]);
        assert_eq!(under, vec!["infield"]);
    }
}
