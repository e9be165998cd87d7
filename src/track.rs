//! The race track: 16 positions, each holding a stack of camels. Movement carries every camel
//! riding on top of the moved camel along with it.

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tinyrand::Rand;

use crate::camel::Camel;
use crate::die::Die;
use crate::display::DisplaySlice;
use crate::error::{EmptyTrackRanking, InvalidDie, PlacementError};

pub const TRACK_POSITIONS: usize = 16;

/// Camels moving past the finish are clamped to this position.
pub const FINISH: usize = TRACK_POSITIONS - 1;

pub const STARTING_POSITIONS: RangeInclusive<usize> = 0..=2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rankings {
    pub first: Camel,
    pub second: Camel,
}

impl Display for Rankings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "1st: {}, 2nd: {}", self.first, self.second)
    }
}

/// Where a camel sits: the track position and its height in the stack (0 is the bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub position: usize,
    pub height: usize,
}

/// Serialized as the array of its 16 stacks. Deserialization validates the placement, so a decoded
/// track never holds the same camel twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "[Vec<Camel>; TRACK_POSITIONS]",
    into = "[Vec<Camel>; TRACK_POSITIONS]"
)]
pub struct Track {
    stacks: [Vec<Camel>; TRACK_POSITIONS],
}
impl Track {
    pub fn from_stacks(stacks: [Vec<Camel>; TRACK_POSITIONS]) -> Result<Self, PlacementError> {
        let track = Self { stacks };
        track.validate()?;
        Ok(track)
    }

    /// Places every camel of the roster on a random starting position. Camels are placed in roster
    /// order, so later camels stack on top of earlier ones sharing a position.
    pub fn starting(rand: &mut impl Rand) -> Self {
        let mut track = Self::default();
        let positions = STARTING_POSITIONS.end() - STARTING_POSITIONS.start() + 1;
        for camel in Camel::iter() {
            let position = STARTING_POSITIONS.start() + rand.next_lim_usize(positions);
            track.stacks[position].push(camel);
        }
        track
    }

    /// Places `camel` on top of the stack at `position`.
    pub fn place(&mut self, position: usize, camel: Camel) -> Result<(), PlacementError> {
        if position >= TRACK_POSITIONS {
            return Err(PlacementError::OutOfRange(position));
        }
        if self.locate(camel).is_some() {
            return Err(PlacementError::Duplicate(camel));
        }
        self.stacks[position].push(camel);
        Ok(())
    }

    pub fn with_stack(mut self, position: usize, camels: &[Camel]) -> Result<Self, PlacementError> {
        for &camel in camels {
            self.place(position, camel)?;
        }
        Ok(self)
    }

    /// Verifies that no camel appears more than once across the track.
    pub fn validate(&self) -> Result<(), PlacementError> {
        let mut seen = [false; Camel::COUNT];
        for camel in self.stacks.iter().flatten() {
            let index = camel.as_index();
            if seen[index] {
                return Err(PlacementError::Duplicate(*camel));
            }
            seen[index] = true;
        }
        Ok(())
    }

    /// The stack at `position`, bottom first.
    ///
    /// # Panics
    /// If `position` is not below [TRACK_POSITIONS].
    #[inline(always)]
    pub fn stack(&self, position: usize) -> &[Camel] {
        &self.stacks[position]
    }

    #[inline(always)]
    pub fn stacks(&self) -> &[Vec<Camel>] {
        &self.stacks
    }

    pub fn locate(&self, camel: Camel) -> Option<Location> {
        self.stacks.iter().enumerate().find_map(|(position, stack)| {
            stack
                .iter()
                .position(|&stacked| stacked == camel)
                .map(|height| Location { position, height })
        })
    }

    /// The number of camels on the track.
    pub fn placed(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Moves the rolled camel, along with every camel stacked above it, by the face value of the
    /// die. The moved sub-stack keeps its order and lands on top of the destination stack. A `None`
    /// die leaves the track unchanged. On error, the track is not modified.
    pub fn apply_roll(&mut self, die: Option<Die>) -> Result<&Self, InvalidDie> {
        let Some(die) = die else {
            return Ok(self);
        };
        if !Die::is_valid_face(die.value) {
            return Err(InvalidDie::Face(die.value));
        }
        let Location { position, height } = self
            .locate(die.camel)
            .ok_or(InvalidDie::NotPlaced(die.camel))?;
        let destination = usize::min(FINISH, position + die.value as usize);
        let riders = self.stacks[position].split_off(height);
        self.stacks[destination].extend(riders);
        Ok(self)
    }

    /// Every placed camel, from the leader backwards.
    pub fn standings(&self) -> Vec<Camel> {
        self.descending().collect()
    }

    /// The camels placed 1st and 2nd.
    pub fn rankings(&self) -> Result<Rankings, EmptyTrackRanking> {
        let mut descending = self.descending();
        match (descending.next(), descending.next()) {
            (Some(first), Some(second)) => Ok(Rankings { first, second }),
            _ => Err(EmptyTrackRanking {
                placed: self.placed(),
            }),
        }
    }

    fn descending(&self) -> impl Iterator<Item = Camel> + '_ {
        self.stacks
            .iter()
            .rev()
            .flat_map(|stack| stack.iter().rev().copied())
    }
}

impl TryFrom<[Vec<Camel>; TRACK_POSITIONS]> for Track {
    type Error = PlacementError;

    fn try_from(stacks: [Vec<Camel>; TRACK_POSITIONS]) -> Result<Self, Self::Error> {
        Self::from_stacks(stacks)
    }
}

impl From<Track> for [Vec<Camel>; TRACK_POSITIONS] {
    fn from(track: Track) -> Self {
        track.stacks
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (position, stack) in self.stacks.iter().enumerate() {
            if !stack.is_empty() {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{position}:{}", DisplaySlice::from(&stack[..]))?;
                first = false;
            }
        }
        Ok(())
    }
}
