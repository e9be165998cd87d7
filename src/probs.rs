//! Per-camel placing probabilities and the tallies they are derived from.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::camel::Camel;
use crate::track::Rankings;

pub trait SliceExt {
    fn sum(&self) -> f64;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}
impl Fraction {
    pub fn quotient(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The probabilities of a camel finishing the leg 1st and 2nd.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placing {
    pub first: f64,
    pub second: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    placings: [Placing; Camel::COUNT],
}
impl ProbabilityTable {
    pub fn iter(&self) -> impl Iterator<Item = (Camel, &Placing)> {
        Camel::iter().zip(self.placings.iter())
    }

    pub fn first_probs(&self) -> [f64; Camel::COUNT] {
        self.placings.map(|placing| placing.first)
    }

    pub fn second_probs(&self) -> [f64; Camel::COUNT] {
        self.placings.map(|placing| placing.second)
    }

    /// The camel most likely to win the leg; the earliest in roster order on ties.
    pub fn favourite(&self) -> Camel {
        let mut favourite = Camel::Red;
        for (camel, placing) in self.iter() {
            if placing.first > self[favourite].first {
                favourite = camel;
            }
        }
        favourite
    }
}

impl Index<Camel> for ProbabilityTable {
    type Output = Placing;

    fn index(&self, camel: Camel) -> &Self::Output {
        &self.placings[camel.as_index()]
    }
}

/// Counts of 1st and 2nd place finishes over a number of replayed outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    firsts: [u64; Camel::COUNT],
    seconds: [u64; Camel::COUNT],
    outcomes: u64,
}
impl Tally {
    #[inline]
    pub fn record(&mut self, rankings: &Rankings) {
        self.firsts[rankings.first.as_index()] += 1;
        self.seconds[rankings.second.as_index()] += 1;
        self.outcomes += 1;
    }

    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }

    pub fn firsts(&self, camel: Camel) -> Fraction {
        Fraction {
            numerator: self.firsts[camel.as_index()],
            denominator: self.outcomes,
        }
    }

    pub fn seconds(&self, camel: Camel) -> Fraction {
        Fraction {
            numerator: self.seconds[camel.as_index()],
            denominator: self.outcomes,
        }
    }

    /// Converts the counts to probabilities. Every camel of the roster is present, including those
    /// that never placed. An empty tally yields all zeros.
    pub fn to_table(&self) -> ProbabilityTable {
        let mut table = ProbabilityTable::default();
        if self.outcomes == 0 {
            return table;
        }
        for camel in Camel::iter() {
            table.placings[camel.as_index()] = Placing {
                first: self.firsts(camel).quotient(),
                second: self.seconds(camel).quotient(),
            };
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_slice_f64_near;
    use assert_float_eq::*;
    use Camel::{Blue, Green, Purple, Red, Yellow};

    #[test]
    fn sum() {
        let data = [0.0, 0.1, 0.2];
        assert_f64_near!(0.3, data.sum(), 1);
    }

    #[test]
    fn fraction() {
        let fraction = Fraction {
            numerator: 3,
            denominator: 4,
        };
        assert_eq!(0.75, fraction.quotient());
        assert_eq!("3/4", format!("{fraction}"));
    }

    #[test]
    fn tally_to_table() {
        let mut tally = Tally::default();
        tally.record(&Rankings {
            first: Green,
            second: Red,
        });
        tally.record(&Rankings {
            first: Green,
            second: Yellow,
        });
        tally.record(&Rankings {
            first: Red,
            second: Green,
        });
        tally.record(&Rankings {
            first: Green,
            second: Red,
        });
        assert_eq!(4, tally.outcomes());
        assert_eq!(3, tally.firsts(Green).numerator);

        let table = tally.to_table();
        assert_slice_f64_near(&[0.25, 0.0, 0.75, 0.0, 0.0], &table.first_probs(), 1);
        assert_slice_f64_near(&[0.5, 0.0, 0.25, 0.25, 0.0], &table.second_probs(), 1);
        assert_f64_near!(1.0, table.first_probs().sum(), 1);
        assert_f64_near!(1.0, table.second_probs().sum(), 1);
        assert_eq!(Green, table.favourite());
        assert_eq!(Placing::default(), table[Blue]);
        assert_eq!(Placing::default(), table[Purple]);
    }

    #[test]
    fn empty_tally() {
        let table = Tally::default().to_table();
        assert_eq!(ProbabilityTable::default(), table);
        assert_eq!(Red, table.favourite());
    }
}
