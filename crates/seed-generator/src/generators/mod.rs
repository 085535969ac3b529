//! Individual value generators for the company record fields.
//!
//! Each submodule produces one kind of value from the given RNG. None of them
//! hold state, so a generator can be shared freely between records.

pub mod company;
pub mod date;
pub mod identifier;
pub mod numeric;

use rand::Rng;

/// Pick one entry from a non-empty pool.
pub fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = ["a", "b", "c"];

        for _ in 0..50 {
            assert!(pool.contains(&pick(&mut rng, &pool)));
        }
    }
}
