//! Wall-clock timing of fallible computations.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    /// Runs `f`, timing it if it succeeds.
    pub fn result<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        let value = f()?;
        Ok(Timed {
            value,
            elapsed: start_time.elapsed(),
        })
    }
}
