use crate::domain::{GeoLocation, RankedSpot, Spot};
use ordered_float::OrderedFloat;
use tracing::{debug, instrument};

/// Ranks `spots` by their distance from `reference`, nearest first.
/// Spots at the same distance keep their catalog order.
#[instrument(skip(spots), fields(spot_count = spots.len()))]
pub fn rank_by_distance<'a>(reference: &GeoLocation, spots: &'a [Spot]) -> Vec<RankedSpot<'a>> {
    let mut measured = spots.iter().map(|spot| (spot, reference.distance_to(spot.location()))).collect::<Vec<_>>();
    measured.sort_by_key(|(_, distance)| OrderedFloat(distance.meters()));

    let ranked = measured
        .into_iter()
        .enumerate()
        .map(|(index, (spot, distance))| RankedSpot::new(index + 1, spot, distance))
        .collect::<Vec<_>>();

    if let (Some(nearest), Some(farthest)) = (ranked.first(), ranked.last()) {
        debug!(
            "Nearest spot is '{}' at {}, farthest is '{}' at {}",
            nearest.spot().name(),
            nearest.distance(),
            farthest.spot().name(),
            farthest.distance()
        );
    }

    ranked
}
