use serde::{Deserialize, Serialize};

use super::{SectionNumber, ZoneId, ZoneName};
use crate::density::DensityBand;

/// A grouping of venue sections treated as one operational unit for
/// staffing and occupancy purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: ZoneName,
    pub sections: Vec<SectionNumber>,
    pub total_seats: u32,
    pub current_occupancy: u32,
    pub density: DensityBand,
    pub staff_count: u32,
    pub recommended_staff: u32,
}

impl Zone {
    /// Occupancy as a percentage of total seats (0.0 when the zone has no seats).
    pub fn occupancy_percent(&self) -> f64 {
        if self.total_seats == 0 {
            return 0.0;
        }
        self.current_occupancy as f64 / self.total_seats as f64 * 100.0
    }

    /// Staff above the recommended count, zero when at or below it.
    pub fn staff_surplus(&self) -> u32 {
        self.staff_count.saturating_sub(self.recommended_staff)
    }

    /// Staff below the recommended count, zero when at or above it.
    pub fn staff_shortage(&self) -> u32 {
        self.recommended_staff.saturating_sub(self.staff_count)
    }

    pub fn is_overstaffed(&self) -> bool {
        self.staff_count > self.recommended_staff
    }

    pub fn is_understaffed(&self) -> bool {
        self.staff_count < self.recommended_staff
    }

    /// Current staff as a percentage of the recommended count.
    /// 100.0 when no staff is recommended.
    pub fn staff_coverage_percent(&self) -> f64 {
        if self.recommended_staff == 0 {
            return 100.0;
        }
        self.staff_count as f64 / self.recommended_staff as f64 * 100.0
    }

    pub fn staffing_status(&self) -> StaffingStatus {
        StaffingStatus::from_coverage(self.staff_coverage_percent())
    }
}

/// Staffing adequacy bands used by the staff overview display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffingStatus {
    /// Coverage at or above the recommended count.
    Sufficient,
    /// Coverage of at least 80% of the recommendation.
    Adequate,
    /// Coverage of at least 60% of the recommendation.
    Strained,
    /// Coverage below 60% of the recommendation.
    Short,
}

impl StaffingStatus {
    pub fn from_coverage(percent: f64) -> Self {
        if percent >= 100.0 {
            StaffingStatus::Sufficient
        } else if percent >= 80.0 {
            StaffingStatus::Adequate
        } else if percent >= 60.0 {
            StaffingStatus::Strained
        } else {
            StaffingStatus::Short
        }
    }
}
