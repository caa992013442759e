use crate::domain::{Distance, Spot};

/// A spot paired with its distance from the reference point and its 1-based position when ordered by that distance.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedSpot<'a> {
    rank: usize,
    spot: &'a Spot,
    distance: Distance,
}

impl<'a> RankedSpot<'a> {
    pub fn new(rank: usize, spot: &'a Spot, distance: Distance) -> Self {
        RankedSpot { rank, spot, distance }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn spot(&self) -> &'a Spot {
        self.spot
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}
