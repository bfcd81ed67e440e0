use std::collections::HashSet;

use tracing::debug;

use crate::models::Zone;
use crate::suggestions::{SuggestionId, TransferSuggestion};
use crate::RecommenderError;

/// Compute staff transfer suggestions for the given zone roster.
///
/// Overstaffed zones are paired greedily with understaffed ones: the most
/// over-provisioned zone is processed first and satisfies the smallest
/// shortage first, which tends to produce more, smaller transfers rather
/// than one large one. Each zone participates in at most one suggestion
/// per computation; residual imbalance is left for a later snapshot
/// rather than resolved in multiple passes.
///
/// Pure over its input: deterministic for a given roster, never mutates.
pub fn compute_suggestions(zones: &[Zone]) -> Vec<TransferSuggestion> {
    let mut overstaffed: Vec<&Zone> = zones.iter().filter(|z| z.is_overstaffed()).collect();
    let mut understaffed: Vec<&Zone> = zones.iter().filter(|z| z.is_understaffed()).collect();

    if overstaffed.is_empty() || understaffed.is_empty() {
        return Vec::new();
    }

    // Largest surplus first, smallest shortage first. Sorts are stable, so
    // ties keep the roster order.
    overstaffed.sort_by_key(|z| std::cmp::Reverse(z.staff_surplus()));
    understaffed.sort_by_key(|z| z.staff_shortage());

    let mut suggestions = Vec::new();
    let mut used_destinations: HashSet<&str> = HashSet::new();

    for source in overstaffed {
        let target = understaffed
            .iter()
            .find(|z| !used_destinations.contains(z.name.as_str()));

        let Some(target) = target else {
            break;
        };

        let staff_count = source.staff_surplus().min(target.staff_shortage());
        debug!(
            from = %source.name,
            to = %target.name,
            staff_count,
            "pairing overstaffed zone with understaffed zone"
        );

        suggestions.push(TransferSuggestion::new(
            source.name.clone(),
            target.name.clone(),
            staff_count,
            format!(
                "{} is {} over its recommended staffing while {} is {} short",
                source.name,
                source.staff_surplus(),
                target.name,
                target.staff_shortage()
            ),
        ));
        used_destinations.insert(target.name.as_str());
    }

    suggestions
}

/// Apply the selected suggestions, returning a new zone collection with
/// staff counts adjusted. The input roster is left untouched.
///
/// Suggestions referencing zones no longer in the roster, or whose source
/// zone no longer has enough staff to cover the move, are skipped: zone
/// data may have changed between computation and application, and a stale
/// row should not block the rest of the selection. Transfers in one batch
/// touch disjoint zones, so application order does not matter.
pub fn apply_selection(
    zones: &[Zone],
    suggestions: &[TransferSuggestion],
    selected: &HashSet<SuggestionId>,
) -> Result<Vec<Zone>, RecommenderError> {
    if selected.is_empty() {
        return Err(RecommenderError::EmptySelection);
    }

    let mut updated: Vec<Zone> = zones.to_vec();

    for suggestion in suggestions.iter().filter(|s| selected.contains(&s.id)) {
        let source_idx = updated.iter().position(|z| z.name == suggestion.from_zone);
        let target_idx = updated.iter().position(|z| z.name == suggestion.to_zone);

        let (Some(source_idx), Some(target_idx)) = (source_idx, target_idx) else {
            debug!(
                id = %suggestion.id,
                "skipping suggestion referencing a zone no longer present"
            );
            continue;
        };

        // A transfer moves staff, never creates it. If the source has
        // shrunk below the suggested count since computation, the
        // suggestion is as stale as a missing zone.
        if updated[source_idx].staff_count < suggestion.staff_count {
            debug!(
                id = %suggestion.id,
                available = updated[source_idx].staff_count,
                "skipping suggestion whose source zone can no longer cover the move"
            );
            continue;
        }

        updated[source_idx].staff_count -= suggestion.staff_count;
        updated[target_idx].staff_count += suggestion.staff_count;
    }

    Ok(updated)
}
