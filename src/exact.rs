//! Exact leg odds by exhaustive replay of the roll space.
//!
//! Every roll sequence that can drain the pyramid is equally likely, so the probability of a camel
//! placing is the share of sequences after which it places. The number of sequences grows as
//! `n! × 3^n`, which is tractable for the five dice of a leg.

use tracing::{debug, trace};

use crate::display::DisplaySlice;
use crate::error::{AnalysisError, InvalidDie};
use crate::probs::{ProbabilityTable, Tally};
use crate::pyramid::Pyramid;
use crate::roll_space::enumerate_all;
use crate::track::Track;

/// Verifies that `track` holds every camel at most once, that the remaining dice can be applied to
/// it and that the outcome can be ranked.
pub fn check_preconditions(track: &Track, pyramid: &Pyramid) -> Result<(), AnalysisError> {
    track.validate()?;
    if let Some(unplaced) = pyramid.iter().find(|&camel| track.locate(camel).is_none()) {
        return Err(InvalidDie::NotPlaced(unplaced).into());
    }
    track.rankings()?;
    Ok(())
}

/// Computes the exact probability of every camel finishing the leg 1st and 2nd. The given track
/// and pyramid are left as they are; sequences are replayed on a private copy of the track.
pub fn analyse_exact(track: &Track, pyramid: &Pyramid) -> Result<ProbabilityTable, AnalysisError> {
    check_preconditions(track, pyramid)?;
    let roll_space = enumerate_all(pyramid);
    debug!(
        "replaying {} roll sequences of pyramid {pyramid} on track {track}",
        roll_space.len()
    );

    let mut working = track.clone();
    let mut tally = Tally::default();
    for sequence in &roll_space {
        working.clone_from(track);
        for &die in sequence {
            working.apply_roll(Some(die))?;
        }
        let rankings = working.rankings()?;
        trace!("{} -> {rankings}", DisplaySlice::from(&sequence[..]));
        tally.record(&rankings);
    }
    Ok(tally.to_table())
}
