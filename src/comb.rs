//! Combinatorics over ordinal vectors. A combination number is decoded into one ordinal per
//! cardinality in mixed radix, which lets the roll space be walked without recursion.

pub fn pick(cardinalities: &[usize], combination: u64, ordinals: &mut [usize]) {
    let mut residual = combination;
    for (index, &cardinality) in cardinalities.iter().enumerate() {
        let cardinality = cardinality as u64;
        let (quotient, remainder) = (residual / cardinality, residual % cardinality);
        residual = quotient;
        ordinals[index] = remainder as usize;
    }
}

pub fn count_combinations(cardinalities: &[usize]) -> u64 {
    cardinalities.iter().product::<usize>() as u64
}

pub struct Combinator<'a> {
    cardinalities: &'a [usize],
    combinations: u64,
}
impl<'a> Combinator<'a> {
    pub fn new(cardinalities: &'a [usize]) -> Self {
        let combinations = count_combinations(cardinalities);
        Self {
            cardinalities,
            combinations,
        }
    }
}

impl<'a> IntoIterator for Combinator<'a> {
    type Item = Vec<usize>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            combinator: self,
            combination: 0,
        }
    }
}

pub struct Iter<'a> {
    combinator: Combinator<'a>,
    combination: u64,
}
impl<'a> Iterator for Iter<'a> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.combination != self.combinator.combinations {
            let mut ordinals = vec![0; self.combinator.cardinalities.len()];
            pick(
                self.combinator.cardinalities,
                self.combination,
                &mut ordinals,
            );
            self.combination += 1;
            Some(ordinals)
        } else {
            None
        }
    }
}

pub fn is_unique_linear(elements: &[usize], bitmap: &mut [bool]) -> bool {
    bitmap.fill(false);
    for &element in elements {
        if bitmap[element] {
            return false;
        }
        bitmap[element] = true;
    }
    true
}

/// All orderings of `items` indices, obtained by filtering the `items`<sup>`items`</sup>
/// combinations down to those without repeats.
pub fn permutations(items: usize) -> Vec<Vec<usize>> {
    let cardinalities = vec![items; items];
    let mut bitmap = vec![false; items];
    Combinator::new(&cardinalities)
        .into_iter()
        .filter(|ordinals| is_unique_linear(ordinals, &mut bitmap))
        .collect()
}
