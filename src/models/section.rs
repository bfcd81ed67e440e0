use serde::{Deserialize, Serialize};

use super::SectionNumber;
use crate::density::DensityBand;

/// Per-section drill-down record as reported by the seating data source.
/// The density percentage is carried as reported rather than recomputed,
/// since some sections (standing areas) have occupancy without seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDetail {
    pub section_number: SectionNumber,
    pub total_seats: u32,
    pub current_occupancy: u32,
    pub density_percent: f64,
    pub staff_count: u32,
}

impl SectionDetail {
    pub fn density_band(&self) -> DensityBand {
        DensityBand::classify(self.density_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_follows_reported_density() {
        let section = SectionDetail {
            section_number: "316".into(),
            total_seats: 400,
            current_occupancy: 380,
            density_percent: 95.0,
            staff_count: 2,
        };
        assert_eq!(section.density_band(), DensityBand::VeryCongested);
    }
}
