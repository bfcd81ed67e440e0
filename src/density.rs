use serde::{Deserialize, Serialize};

/// Ordered occupancy-density bands used for zone and section color-coding.
///
/// Classification is by fixed thresholds on the occupancy percentage:
/// 95 and above is `VeryCongested`, 80 and above `Congested`, 60 and
/// above `Moderate`, everything below `Comfortable`. Thresholds are
/// inclusive, so exactly 95.0 classifies as `VeryCongested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DensityBand {
    Comfortable,
    Moderate,
    Congested,
    VeryCongested,
}

impl DensityBand {
    pub fn classify(percent: f64) -> Self {
        if percent >= 95.0 {
            DensityBand::VeryCongested
        } else if percent >= 80.0 {
            DensityBand::Congested
        } else if percent >= 60.0 {
            DensityBand::Moderate
        } else {
            DensityBand::Comfortable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DensityBand::VeryCongested => "very congested",
            DensityBand::Congested => "congested",
            DensityBand::Moderate => "moderate",
            DensityBand::Comfortable => "comfortable",
        }
    }

    /// Bands at `Congested` or above warrant an operator alert.
    pub fn is_alert(&self) -> bool {
        *self >= DensityBand::Congested
    }
}

impl std::fmt::Display for DensityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Heatmap intensity thresholds, finest at the congested end where
// operators need the most contrast.
const HEAT_THRESHOLDS: [f64; 11] = [
    95.0, 90.0, 85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 50.0, 40.0, 30.0,
];

/// Heatmap color intensity for an occupancy percentage, from 0 (coolest)
/// to 11 (hottest). Same input domain as [`DensityBand::classify`], finer
/// output space; a lookup table rather than a different algorithm.
pub fn heat_level(percent: f64) -> u8 {
    for (i, threshold) in HEAT_THRESHOLDS.iter().enumerate() {
        if percent >= *threshold {
            return (HEAT_THRESHOLDS.len() - i) as u8;
        }
    }
    0
}

/// Heatmap intensity of one section relative to its zone group, from 0 to 4.
///
/// Positions the value within the group's min..max density range so that
/// uniformly congested groups still show internal contrast. Returns `None`
/// for an empty group; a group with no spread maps to the middle step.
pub fn relative_heat_level(percent: f64, group: &[f64]) -> Option<u8> {
    if group.is_empty() {
        return None;
    }
    let min = group.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = group.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return Some(2);
    }

    let position = (percent - min) / range;
    let level = if position >= 0.8 {
        4
    } else if position >= 0.6 {
        3
    } else if position >= 0.4 {
        2
    } else if position >= 0.2 {
        1
    } else {
        0
    };
    Some(level)
}
