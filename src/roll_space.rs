//! The roll space of a pyramid: every order in which its dice may be shaken out, crossed with every
//! assignment of faces to those dice.

use rustc_hash::FxHashSet;

use crate::comb::{count_combinations, permutations, Combinator};
use crate::die::{Die, FACES};
use crate::factorial::{Calculator, Factorial};
use crate::pyramid::Pyramid;

pub type RollSequence = Vec<Die>;

/// The number of distinct roll sequences for a pyramid holding `dice` dice: `dice! × 3^dice`.
pub fn count_sequences(dice: usize) -> u64 {
    Calculator.get(dice as u8) * count_combinations(&vec![FACES.len(); dice])
}

/// Enumerates every roll sequence that can drain the given pyramid. An empty pyramid yields a single
/// empty sequence.
pub fn enumerate_all(pyramid: &Pyramid) -> FxHashSet<RollSequence> {
    let camels = pyramid.iter().collect::<Vec<_>>();
    let dice = camels.len();
    let face_cardinalities = vec![FACES.len(); dice];
    let mut roll_space = FxHashSet::default();
    roll_space.reserve(count_sequences(dice) as usize);
    for ordering in permutations(dice) {
        for faces in Combinator::new(&face_cardinalities) {
            let sequence = ordering
                .iter()
                .zip(faces)
                .map(|(&camel, face)| Die::new(camels[camel], FACES[face]))
                .collect();
            roll_space.insert(sequence);
        }
    }
    roll_space
}
