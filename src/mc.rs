//! Monte Carlo estimation of leg odds. Each trial shakes the remaining dice out of a copy of the
//! pyramid in random order, replays them on a copy of the track and tallies the rankings.

use tinyrand::{Rand, StdRand};
use tracing::debug;

use crate::capture::{Capture, CaptureMut};
use crate::error::{AnalysisError, InvalidTrials};
use crate::exact::check_preconditions;
use crate::probs::{ProbabilityTable, Tally};
use crate::pyramid::Pyramid;
use crate::track::{Rankings, Track};

pub const DEFAULT_TRIALS: u64 = 5_000;

/// Plays out one random completion of the leg in place, draining `pyramid` into `track`.
pub fn run_once(
    track: &mut Track,
    pyramid: &mut Pyramid,
    rand: &mut impl Rand,
) -> Result<Rankings, AnalysisError> {
    while let Some(die) = pyramid.shake(rand) {
        track.apply_roll(Some(die))?;
    }
    Ok(track.rankings()?)
}

pub struct MonteCarloEngine<'a, R: Rand> {
    trials: u64,
    track: Capture<'a, Track, Track>,
    pyramid: Capture<'a, Pyramid, Pyramid>,
    rand: CaptureMut<'a, R, R>,
}
impl<'a, R: Rand> MonteCarloEngine<'a, R> {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_track(mut self, track: Capture<'a, Track, Track>) -> Self {
        self.track = track;
        self
    }

    pub fn with_pyramid(mut self, pyramid: Capture<'a, Pyramid, Pyramid>) -> Self {
        self.pyramid = pyramid;
        self
    }

    pub fn with_rand<Q: Rand>(self, rand: CaptureMut<'a, Q, Q>) -> MonteCarloEngine<'a, Q> {
        MonteCarloEngine {
            trials: self.trials,
            track: self.track,
            pyramid: self.pyramid,
            rand,
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Estimates the probability of every camel finishing the leg 1st and 2nd. The captured track
    /// and pyramid are only read; each trial runs on scratch copies.
    pub fn simulate(&mut self) -> Result<ProbabilityTable, AnalysisError> {
        if self.trials == 0 {
            return Err(InvalidTrials.into());
        }
        check_preconditions(&self.track, &self.pyramid)?;
        debug!(
            "simulating {} trials of pyramid {} on track {}",
            self.trials, *self.pyramid, *self.track
        );

        let mut track = Track::clone(&self.track);
        let mut tally = Tally::default();
        for _ in 0..self.trials {
            track.clone_from(&self.track);
            let mut pyramid = *self.pyramid;
            let rankings = run_once(&mut track, &mut pyramid, &mut *self.rand)?;
            tally.record(&rankings);
        }
        Ok(tally.to_table())
    }
}

impl<'a> Default for MonteCarloEngine<'a, StdRand> {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            track: Capture::Owned(Track::default()),
            pyramid: Capture::Owned(Pyramid::full()),
            rand: CaptureMut::Owned(StdRand::default()),
        }
    }
}

/// Estimates leg odds over `trials` random completions of the leg.
pub fn analyse_monte_carlo<R: Rand>(
    track: &Track,
    pyramid: &Pyramid,
    trials: u64,
    rand: &mut R,
) -> Result<ProbabilityTable, AnalysisError> {
    MonteCarloEngine::<StdRand>::default()
        .with_trials(trials)
        .with_track(Capture::Borrowed(track))
        .with_pyramid(Capture::Borrowed(pyramid))
        .with_rand(CaptureMut::Borrowed(rand))
        .simulate()
}
