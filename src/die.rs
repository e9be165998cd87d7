//! A [Die] is the outcome of shaking one camel's die out of the pyramid.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tinyrand::Rand;

use crate::camel::Camel;

/// The faces of every camel die.
pub const FACES: [u8; 3] = [1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub camel: Camel,
    pub value: u8,
}
impl Die {
    pub fn new(camel: Camel, value: u8) -> Self {
        Self { camel, value }
    }

    /// Rolls the die of the given `camel`, drawing a face uniformly.
    pub fn roll(camel: Camel, rand: &mut impl Rand) -> Self {
        let face = rand.next_lim_usize(FACES.len());
        Self::new(camel, FACES[face])
    }

    #[inline(always)]
    pub fn is_valid_face(value: u8) -> bool {
        FACES.contains(&value)
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.camel, self.value)
    }
}

impl FromStr for Die {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let code = chars.next().context("no characters to parse")?;
        let camel = Camel::from_code(code)?;
        let value: u8 = chars.as_str().parse()?;
        if !Die::is_valid_face(value) {
            bail!("face value {value} is not one of {FACES:?}");
        }
        Ok(Self::new(camel, value))
    }
}
