//! The fixed roster of racing camels.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context};
use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

/// A racing camel. The declaration order is the roster order, which also fixes the row order of
/// every probability table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Ordinal, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum Camel {
    #[serde(rename = "r")]
    Red,
    #[serde(rename = "b")]
    Blue,
    #[serde(rename = "g")]
    Green,
    #[serde(rename = "y")]
    Yellow,
    #[serde(rename = "p")]
    Purple,
}
impl Camel {
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    #[inline(always)]
    pub fn as_index(&self) -> usize {
        self.ordinal()
    }

    pub fn code(&self) -> char {
        match self {
            Camel::Red => 'r',
            Camel::Blue => 'b',
            Camel::Green => 'g',
            Camel::Yellow => 'y',
            Camel::Purple => 'p',
        }
    }

    pub fn from_code(code: char) -> anyhow::Result<Self> {
        Self::iter()
            .find(|camel| camel.code() == code.to_ascii_lowercase())
            .with_context(|| format!("unknown camel '{code}'"))
    }
}

impl Display for Camel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Camel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let code = chars.next().context("no characters to parse")?;
        if !chars.as_str().is_empty() {
            bail!("camel must be a single character");
        }
        Self::from_code(code)
    }
}
