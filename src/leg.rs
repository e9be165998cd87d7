//! The live state of a leg: the track, the dice still in the pyramid, the dice already rolled, the
//! betting tickets on offer and the players holding them.

use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

use crate::betting::{Player, Ticket, TicketTents, ROLL_REWARD};
use crate::camel::Camel;
use crate::die::Die;
use crate::error::{AnalysisError, EmptyTrackRanking, InvalidDie};
use crate::exact::analyse_exact;
use crate::mc::analyse_monte_carlo;
use crate::probs::ProbabilityTable;
use crate::pyramid::Pyramid;
use crate::timed::Timed;
use crate::track::Track;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LegError {
    #[error("the die of camel {0} has already been rolled this leg")]
    AlreadyRolled(Camel),

    #[error("no player at seat {0}")]
    UnknownPlayer(usize),

    #[error("{0}")]
    InvalidDie(#[from] InvalidDie),
}

/// Leg odds from both analysers, side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub exact: ProbabilityTable,
    pub experimental: ProbabilityTable,
}

#[derive(Debug, Clone)]
pub struct Leg {
    pub track: Track,
    pub pyramid: Pyramid,
    pub dice_tents: Vec<Die>,
    pub ticket_tents: TicketTents,
    pub players: Vec<Player>,
}
impl Leg {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            pyramid: Pyramid::full(),
            dice_tents: vec![],
            ticket_tents: TicketTents::default(),
            players: vec![],
        }
    }

    pub fn with_players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.players = names.into_iter().map(Player::new).collect();
        self
    }

    pub fn with_pyramid(mut self, pyramid: Pyramid) -> Self {
        self.pyramid = pyramid;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.pyramid.is_empty()
    }

    /// Shakes a die out of the pyramid and moves its camel. Returns `None` once every die has been
    /// rolled.
    pub fn roll(&mut self, rand: &mut impl Rand) -> Result<Option<Die>, InvalidDie> {
        let mut pyramid = self.pyramid;
        let Some(die) = pyramid.shake(rand) else {
            return Ok(None);
        };
        self.track.apply_roll(Some(die))?;
        self.pyramid = pyramid;
        self.dice_tents.push(die);
        debug!("rolled {die}, track: {}", self.track);
        Ok(Some(die))
    }

    /// Rolls on behalf of the player at `seat`, who earns [ROLL_REWARD] if a die came out.
    pub fn roll_by(&mut self, seat: usize, rand: &mut impl Rand) -> Result<Option<Die>, LegError> {
        if seat >= self.players.len() {
            return Err(LegError::UnknownPlayer(seat));
        }
        let die = self.roll(rand)?;
        if die.is_some() {
            self.players[seat].win(ROLL_REWARD);
        }
        Ok(die)
    }

    /// The player at `seat` takes the top ticket for `camel`. Returns `None`, leaving the player's
    /// hand as it was, when that tent is empty.
    pub fn bet(&mut self, seat: usize, camel: Camel) -> Result<Option<Ticket>, LegError> {
        let player = self
            .players
            .get_mut(seat)
            .ok_or(LegError::UnknownPlayer(seat))?;
        let ticket = self.ticket_tents.take(camel);
        if let Some(ticket) = ticket {
            debug!("{} takes ticket {ticket}", player.name);
            player.add_ticket(ticket);
        }
        Ok(ticket)
    }

    /// Pays out every player's tickets against the current rankings, returning each player's net
    /// change in coins in seat order.
    pub fn settle(&mut self) -> Result<Vec<i32>, EmptyTrackRanking> {
        let rankings = self.track.rankings()?;
        Ok(self
            .players
            .iter_mut()
            .map(|player| player.settle(&rankings))
            .collect())
    }

    /// Applies a die whose outcome is already known, taking it out of the pyramid.
    pub fn apply(&mut self, die: Die) -> Result<(), LegError> {
        if !self.pyramid.contains(die.camel) {
            return Err(LegError::AlreadyRolled(die.camel));
        }
        self.track.apply_roll(Some(die))?;
        self.pyramid.remove(die.camel);
        self.dice_tents.push(die);
        Ok(())
    }

    /// Starts the next leg: every die goes back into the pyramid and the ticket tents are restocked.
    pub fn next_leg(&mut self) {
        self.pyramid.reset();
        self.dice_tents.clear();
        self.ticket_tents.reset();
    }

    /// Runs both analysers over the current state of the leg.
    pub fn advise(&self, trials: u64, rand: &mut impl Rand) -> Result<Advice, AnalysisError> {
        let exact = Timed::result(|| analyse_exact(&self.track, &self.pyramid))?;
        let experimental =
            Timed::result(|| analyse_monte_carlo(&self.track, &self.pyramid, trials, rand))?;
        debug!(
            "exact analysis took {:.3}s, {trials} trials took {:.3}s",
            exact.elapsed.as_secs_f64(),
            experimental.elapsed.as_secs_f64()
        );
        Ok(Advice {
            exact: exact.value,
            experimental: experimental.value,
        })
    }
}
