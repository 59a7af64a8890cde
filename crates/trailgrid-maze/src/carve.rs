use rand::{Rng, RngExt};
use trailgrid_core::CellType;

/// Relative odds of the terrain laid down on each carved cell.
///
/// The variation is cosmetic: it gives searches something to weigh, but
/// does not affect the maze layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarveWeights {
    pub empty: u32,
    pub sand: u32,
    pub water: u32,
}

impl Default for CarveWeights {
    fn default() -> Self {
        Self {
            empty: 95,
            sand: 4,
            water: 1,
        }
    }
}

impl CarveWeights {
    /// Carve plain Empty floor only.
    pub const EMPTY_ONLY: Self = Self {
        empty: 1,
        sand: 0,
        water: 0,
    };

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        u64::from(self.empty) + u64::from(self.sand) + u64::from(self.water)
    }

    /// Draw one terrain type. All-zero weights always give Empty.
    pub fn draw(&self, rng: &mut impl Rng) -> CellType {
        let total = self.total();
        if total == 0 {
            return CellType::Empty;
        }
        let r = rng.random_range(0..total);
        let empty = u64::from(self.empty);
        if r < empty {
            CellType::Empty
        } else if r < empty + u64::from(self.sand) {
            CellType::Sand
        } else {
            CellType::Water
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_weights_carve_empty() {
        let w = CarveWeights {
            empty: 0,
            sand: 0,
            water: 0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            assert_eq!(w.draw(&mut rng), CellType::Empty);
        }
    }

    #[test]
    fn single_weight_is_certain() {
        let w = CarveWeights {
            empty: 0,
            sand: 0,
            water: 3,
        };
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..32 {
            assert_eq!(w.draw(&mut rng), CellType::Water);
        }
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(CarveWeights::EMPTY_ONLY.draw(&mut rng), CellType::Empty);
    }

    #[test]
    fn default_weights_favour_empty() {
        let w = CarveWeights::default();
        assert_eq!(w.total(), 100);
        let mut rng = StdRng::seed_from_u64(3);
        let draws: Vec<_> = (0..10_000).map(|_| w.draw(&mut rng)).collect();
        let empty = draws.iter().filter(|&&c| c == CellType::Empty).count();
        let sand = draws.iter().filter(|&&c| c == CellType::Sand).count();
        let water = draws.iter().filter(|&&c| c == CellType::Water).count();
        assert_eq!(empty + sand + water, 10_000);
        assert!(empty > 9_200, "empty = {empty}");
        assert!(sand > 200 && sand < 700, "sand = {sand}");
        assert!(water > 20 && water < 250, "water = {water}");
    }
}
