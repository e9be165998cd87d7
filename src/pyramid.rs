//! The pyramid holds one die for every camel that has not moved yet in the current leg.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use tinyrand::Rand;

use crate::camel::Camel;
use crate::die::Die;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Camel>", into = "Vec<Camel>")]
pub struct Pyramid {
    bitmap: [bool; Camel::COUNT],
}
impl Pyramid {
    /// A pyramid holding the die of every camel in the roster, as at the start of a leg.
    pub fn full() -> Self {
        Self {
            bitmap: [true; Camel::COUNT],
        }
    }

    pub fn empty() -> Self {
        Self {
            bitmap: [false; Camel::COUNT],
        }
    }

    #[inline(always)]
    pub fn contains(&self, camel: Camel) -> bool {
        self.bitmap[camel.as_index()]
    }

    /// Takes the die of `camel` out of the pyramid, returning `false` if it had already been taken.
    #[inline]
    pub fn remove(&mut self, camel: Camel) -> bool {
        let present = self.bitmap[camel.as_index()];
        self.bitmap[camel.as_index()] = false;
        present
    }

    pub fn insert(&mut self, camel: Camel) -> bool {
        let absent = !self.bitmap[camel.as_index()];
        self.bitmap[camel.as_index()] = true;
        absent
    }

    pub fn len(&self) -> usize {
        self.bitmap.iter().filter(|&&present| present).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bitmap.contains(&true)
    }

    /// Returns every die to the pyramid.
    pub fn reset(&mut self) {
        self.bitmap.fill(true);
    }

    /// The camels whose dice remain, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = Camel> + '_ {
        self.bitmap
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .filter_map(|(index, _)| Camel::from_index(index))
    }

    /// Shakes one die out of the pyramid: a remaining camel is drawn uniformly, then its face.
    /// Returns `None` when the pyramid is empty.
    pub fn shake(&mut self, rand: &mut impl Rand) -> Option<Die> {
        let remaining = self.len();
        if remaining == 0 {
            return None;
        }
        let pick = rand.next_lim_usize(remaining);
        let camel = self.iter().nth(pick)?;
        self.remove(camel);
        Some(Die::roll(camel, rand))
    }
}

impl Default for Pyramid {
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<Camel> for Pyramid {
    fn from_iter<I: IntoIterator<Item = Camel>>(iter: I) -> Self {
        let mut pyramid = Self::empty();
        for camel in iter {
            pyramid.insert(camel);
        }
        pyramid
    }
}

impl From<Vec<Camel>> for Pyramid {
    fn from(camels: Vec<Camel>) -> Self {
        camels.into_iter().collect()
    }
}

impl From<Pyramid> for Vec<Camel> {
    fn from(pyramid: Pyramid) -> Self {
        pyramid.iter().collect()
    }
}

impl Display for Pyramid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for camel in self.iter() {
            write!(f, "{camel}")?;
        }
        write!(f, "}}")
    }
}
