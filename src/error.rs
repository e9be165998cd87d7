//! Precondition violations raised by the track and the analysers.

use thiserror::Error;

use crate::camel::Camel;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidDie {
    #[error("camel {0} is not on the track")]
    NotPlaced(Camel),

    #[error("face value {0} is not one of [1, 2, 3]")]
    Face(u8),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("at least two camels must be placed to rank the track, found {placed}")]
pub struct EmptyTrackRanking {
    pub placed: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("number of trials must be positive")]
pub struct InvalidTrials;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("camel {0} is already on the track")]
    Duplicate(Camel),

    #[error("position {0} is outside the track (0..16)")]
    OutOfRange(usize),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidDie(#[from] InvalidDie),

    #[error("{0}")]
    EmptyTrackRanking(#[from] EmptyTrackRanking),

    #[error("{0}")]
    InvalidTrials(#[from] InvalidTrials),

    #[error("{0}")]
    Placement(#[from] PlacementError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            "camel y is not on the track",
            InvalidDie::NotPlaced(Camel::Yellow).to_string()
        );
        assert_eq!(
            "face value 0 is not one of [1, 2, 3]",
            InvalidDie::Face(0).to_string()
        );
        assert_eq!(
            "at least two camels must be placed to rank the track, found 1",
            AnalysisError::from(EmptyTrackRanking { placed: 1 }).to_string()
        );
        assert_eq!(
            "position 16 is outside the track (0..16)",
            PlacementError::OutOfRange(16).to_string()
        );
        assert_eq!(
            "camel b is already on the track",
            AnalysisError::from(PlacementError::Duplicate(Camel::Blue)).to_string()
        );
    }
}
