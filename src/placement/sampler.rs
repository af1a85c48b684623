//! Selector - uniform pick from a candidate list
//!
//! There is no weights field. Listing a value twice doubles its odds.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::FxError;

pub struct Selector;

impl Selector {
    /// Pick one candidate with a uniform index in `0..len`.
    ///
    /// `what` names the list in the error when it is empty.
    pub fn choose<'a, R: Rng, T>(
        rng: &mut R,
        candidates: &'a [T],
        what: &'static str,
    ) -> Result<&'a T, FxError> {
        if candidates.is_empty() {
            return Err(FxError::InvalidConfiguration(what));
        }
        let idx = rng.random_range(0..candidates.len());
        Ok(&candidates[idx])
    }
}

/// An RNG seeded from the platform entropy source.
///
/// Falls back to the wall clock if entropy is unavailable; marks only need
/// to look random.
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    match getrandom::fill(&mut buf) {
        Ok(()) => SmallRng::from_seed(buf),
        Err(e) => {
            log::warn!("entropy unavailable ({e}); seeding from clock");
            SmallRng::seed_from_u64(js_sys::Date::now() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn single_candidate_always_wins() {
        let mut rng = rng();
        for _ in 0..200 {
            assert_eq!(Selector::choose(&mut rng, &["only"], "colors"), Ok(&"only"));
        }
    }

    #[test]
    fn empty_candidates_are_invalid() {
        let mut rng = rng();
        let empty: [f64; 0] = [];
        assert_eq!(
            Selector::choose(&mut rng, &empty, "radii"),
            Err(FxError::InvalidConfiguration("radii"))
        );
    }

    #[test]
    fn duplicates_weight_selection() {
        let mut rng = rng();
        let candidates = ["a", "a", "a", "b"];
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| *Selector::choose(&mut rng, &candidates, "colors").unwrap() == "a")
            .count();
        let freq = hits as f64 / trials as f64;
        assert!((freq - 0.75).abs() < 0.02, "frequency of a was {freq}");
    }

    #[test]
    fn every_index_is_reachable() {
        let mut rng = rng();
        let candidates = [0usize, 1, 2, 3, 4];
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[*Selector::choose(&mut rng, &candidates, "radii").unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
