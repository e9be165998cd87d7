//! Leg betting: ticket tents, players and the expected value of a ticket.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use crate::camel::Camel;
use crate::display::DisplaySlice;
use crate::probs::Placing;
use crate::track::Rankings;

/// The values of the tickets stacked in each tent at the start of a leg, top first.
pub const TICKET_VALUES: [u8; 4] = [5, 3, 2, 2];

/// Coins a player holds at the start of the race.
pub const STARTING_COINS: i32 = 3;

/// Earned by a player for rolling a die out of the pyramid.
pub const ROLL_REWARD: i32 = 1;

/// Paid for a ticket on the camel placed 2nd.
pub const SECOND_PLACE_PAYOUT: i32 = 1;

/// Lost for a ticket on any camel placed below 2nd.
pub const UNPLACED_PENALTY: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub camel: Camel,
    pub value: u8,
}

impl Display for Ticket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.camel, self.value)
    }
}

/// The expected coin return of holding a ticket worth `ticket_value` on a camel with the given
/// placing probabilities.
pub fn expected_value(ticket_value: u8, placing: &Placing) -> f64 {
    let unplaced = 1.0 - placing.first - placing.second;
    ticket_value as f64 * placing.first + SECOND_PLACE_PAYOUT as f64 * placing.second
        - UNPLACED_PENALTY as f64 * unplaced
}

/// One tent of tickets per camel. Tickets are taken from the top, highest value first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTents {
    taken: [usize; Camel::COUNT],
}
impl TicketTents {
    pub fn peek(&self, camel: Camel) -> Option<u8> {
        TICKET_VALUES.get(self.taken[camel.as_index()]).copied()
    }

    /// Takes the top ticket from the tent of `camel`, or `None` if the tent is empty.
    pub fn take(&mut self, camel: Camel) -> Option<Ticket> {
        let value = self.peek(camel)?;
        self.taken[camel.as_index()] += 1;
        Some(Ticket { camel, value })
    }

    pub fn remaining(&self, camel: Camel) -> usize {
        TICKET_VALUES.len() - self.taken[camel.as_index()]
    }

    pub fn reset(&mut self) {
        self.taken.fill(0);
    }
}

impl Default for TicketTents {
    fn default() -> Self {
        Self {
            taken: [0; Camel::COUNT],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub coins: i32,
    pub tickets: Vec<Ticket>,
}
impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coins: STARTING_COINS,
            tickets: vec![],
        }
    }

    pub fn win(&mut self, amount: i32) {
        self.coins += amount;
    }

    pub fn pay(&mut self, amount: i32) {
        self.coins -= amount;
    }

    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Pays out the player's tickets against the leg's final rankings and clears them. Returns the
    /// net change in coins.
    pub fn settle(&mut self, rankings: &Rankings) -> i32 {
        let before = self.coins;
        for ticket in std::mem::take(&mut self.tickets) {
            if ticket.camel == rankings.first {
                self.win(ticket.value as i32);
            } else if ticket.camel == rankings.second {
                self.win(SECOND_PLACE_PAYOUT);
            } else {
                self.pay(UNPLACED_PENALTY);
            }
        }
        self.coins - before
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has {} coins", self.name, self.coins)?;
        if !self.tickets.is_empty() {
            write!(f, ", tickets: {}", DisplaySlice::from(&self.tickets[..]))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;
    use Camel::{Blue, Green, Red, Yellow};

    #[test]
    fn tents_hand_out_highest_first() {
        let mut tents = TicketTents::default();
        assert_eq!(Some(5), tents.peek(Red));
        assert_eq!(
            vec![
                Some(Ticket { camel: Red, value: 5 }),
                Some(Ticket { camel: Red, value: 3 }),
                Some(Ticket { camel: Red, value: 2 }),
                Some(Ticket { camel: Red, value: 2 }),
                None
            ],
            (0..5).map(|_| tents.take(Red)).collect::<Vec<_>>()
        );
        assert_eq!(None, tents.peek(Red));
        assert_eq!(0, tents.remaining(Red));
        assert_eq!(4, tents.remaining(Blue));
        assert_eq!(Some(5), tents.peek(Blue));

        tents.reset();
        assert_eq!(TicketTents::default(), tents);
    }

    #[test]
    fn ev() {
        let certain_winner = Placing {
            first: 1.0,
            second: 0.0,
        };
        assert_f64_near!(5.0, expected_value(5, &certain_winner));

        let certain_loser = Placing::default();
        assert_f64_near!(-1.0, expected_value(5, &certain_loser));

        let placing = Placing {
            first: 0.25,
            second: 0.5,
        };
        assert_float_absolute_eq!(3.0 * 0.25 + 0.5 - 0.25, expected_value(3, &placing), 1e-12);
    }

    #[test]
    fn settle() {
        let mut player = Player::new("p1");
        assert_eq!(STARTING_COINS, player.coins);
        player.add_ticket(Ticket { camel: Green, value: 5 });
        player.add_ticket(Ticket { camel: Red, value: 3 });
        player.add_ticket(Ticket { camel: Yellow, value: 2 });
        let delta = player.settle(&Rankings {
            first: Green,
            second: Red,
        });
        assert_eq!(5 + 1 - 1, delta);
        assert_eq!(STARTING_COINS + 5, player.coins);
        assert!(player.tickets.is_empty());
    }

    #[test]
    fn display() {
        let mut player = Player::new("p2");
        assert_eq!("p2 has 3 coins", format!("{player}"));
        player.win(1);
        player.add_ticket(Ticket { camel: Blue, value: 3 });
        assert_eq!("p2 has 4 coins, tickets: [b3]", format!("{player}"));
    }
}
