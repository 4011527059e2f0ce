use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An associate and a location that can jointly fulfil a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EligiblePair {
    pub associate_id: i32,
    pub location_id: i32,
}

/// Intersect the product's associate links, location links and the
/// associate/location pairs that appear together on a schedule.
///
/// The result is distinct and ordered by associate, then location.
pub fn eligible_pairs(
    linked_associates: &[i32],
    linked_locations: &[i32],
    serviced: &[(i32, i32)],
) -> Vec<EligiblePair> {
    let associates: BTreeSet<i32> = linked_associates.iter().copied().collect();
    let locations: BTreeSet<i32> = linked_locations.iter().copied().collect();

    serviced
        .iter()
        .filter(|(associate_id, location_id)| {
            associates.contains(associate_id) && locations.contains(location_id)
        })
        .map(|&(associate_id, location_id)| EligiblePair {
            associate_id,
            location_id,
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
