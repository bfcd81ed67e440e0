use std::collections::{HashMap, HashSet};

use venue_rebalancer::models::VenueSnapshot;
use venue_rebalancer::*;

fn main() {
    println!("Venue Staffing Rebalancer - Example Usage\n");

    let snapshot = create_sample_snapshot();
    print_staffing_overview(&snapshot);

    let recommender = Recommender::new();

    println!("=== Transfer Suggestions ===");
    let plan = recommender.suggest(&snapshot.zones);
    if plan.is_empty() {
        println!("No rebalancing needed - staffing matches recommendations!");
        return;
    }

    println!("{}\n", plan.summary());
    for (i, suggestion) in recommender.display_suggestions(&plan).iter().enumerate() {
        println!("{}. {} ({})", i + 1, suggestion.description(), suggestion.reason);
    }
    if plan.suggestions.len() > recommender.display_suggestions(&plan).len() {
        println!(
            "... and {} more suggestions",
            plan.suggestions.len() - recommender.display_suggestions(&plan).len()
        );
    }

    // Accept every suggestion and show the resulting roster.
    println!("\n=== Applying All Suggestions ===");
    let selected: HashSet<SuggestionId> = plan.suggestions.iter().map(|s| s.id.clone()).collect();
    match recommender.apply(&snapshot.zones, &plan, &selected) {
        Ok(updated) => {
            for (before, after) in snapshot.zones.iter().zip(&updated) {
                let delta = after.staff_count as i64 - before.staff_count as i64;
                println!(
                    "  {}: {} -> {} staff ({:+}) [recommended {}]",
                    after.name, before.staff_count, after.staff_count, delta, after.recommended_staff
                );
            }

            let before_total: u32 = snapshot.zones.iter().map(|z| z.staff_count).sum();
            let after_total: u32 = updated.iter().map(|z| z.staff_count).sum();
            println!("\nTotal zone staff: {} -> {} (conserved)", before_total, after_total);
        }
        Err(e) => eprintln!("Failed to apply suggestions: {}", e),
    }
}

fn print_staffing_overview(snapshot: &VenueSnapshot) {
    println!("=== Venue Snapshot ===");
    println!(
        "Occupancy: {}/{} ({:.1}%, {})",
        snapshot.total_occupancy,
        snapshot.total_capacity,
        snapshot.occupancy_percent(),
        DensityBand::classify(snapshot.occupancy_percent())
    );
    println!(
        "Staff: {} on duty, {} recommended ({} short)\n",
        snapshot.total_staff,
        snapshot.recommended_total_staff,
        snapshot.staffing_deficit()
    );

    println!("Zones:");
    for zone in &snapshot.zones {
        println!(
            "  {} - {:.0}% full ({}), staff {}/{} ({:?})",
            zone.name,
            zone.occupancy_percent(),
            zone.density,
            zone.staff_count,
            zone.recommended_staff,
            zone.staffing_status()
        );
    }
    println!();
}

fn create_sample_snapshot() -> VenueSnapshot {
    let zones = vec![
        sample_zone("home-plate", "Home Plate", 1656, 1520, 22, 25),
        sample_zone("first-infield", "First Base Infield", 6838, 5850, 32, 35),
        sample_zone("third-infield", "Third Base Infield", 6426, 5200, 35, 32),
        sample_zone("first-outfield", "First Base Outfield", 2640, 1850, 12, 8),
        sample_zone("third-outfield", "Third Base Outfield", 3190, 1780, 8, 5),
    ];

    VenueSnapshot {
        total_capacity: 23750,
        total_occupancy: 18200,
        total_staff: 108,
        recommended_total_staff: 105,
        zones,
        sections: Vec::new(),
        demographics: HashMap::new(),
        last_updated: chrono::Utc::now(),
    }
}

fn sample_zone(
    id: &str,
    name: &str,
    total_seats: u32,
    current_occupancy: u32,
    staff_count: u32,
    recommended_staff: u32,
) -> Zone {
    let density = DensityBand::classify(current_occupancy as f64 / total_seats as f64 * 100.0);
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        sections: Vec::new(),
        total_seats,
        current_occupancy,
        density,
        staff_count,
        recommended_staff,
    }
}
