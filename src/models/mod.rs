// Type aliases used across models
pub type ZoneId = String;
pub type ZoneName = String;
pub type SectionNumber = String;

// Module declarations
mod demographics;
mod section;
mod venue;
mod zone;

// Re-exports
pub use demographics::{DemographicBreakdown, GenderSplit};
pub use section::SectionDetail;
pub use venue::VenueSnapshot;
pub use zone::{StaffingStatus, Zone};
