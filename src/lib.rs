//! Exact and Monte Carlo odds of every camel finishing 1st or 2nd in a leg of a camel race.
//! The exact analyser replays every roll sequence that can drain the pyramid; the Monte Carlo
//! engine samples random completions of the leg. Both share the same track transition.

pub mod betting;
pub mod camel;
pub mod capture;
pub mod comb;
pub mod die;
pub mod display;
pub mod error;
pub mod exact;
pub mod factorial;
pub mod file;
pub mod leg;
pub mod mc;
pub mod print;
pub mod probs;
pub mod pyramid;
pub mod roll_space;
pub mod scenario;
pub mod timed;
pub mod track;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
