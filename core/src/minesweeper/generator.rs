use rand::Rng;

use crate::*;

pub trait MinefieldGenerator {
    fn generate(self, config: MinesweeperConfig) -> Result<MineLayout>;
}

/// Uniformly random mine placement by rejection sampling.
///
/// Picks random cells and retries on collisions until the requested mine count is
/// placed. The config is validated first, so there is always a free cell left and
/// the loop terminates.
#[derive(Debug)]
pub struct RandomMinefieldGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomMinefieldGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> MinefieldGenerator for RandomMinefieldGenerator<'_, R> {
    fn generate(self, config: MinesweeperConfig) -> Result<MineLayout> {
        config.validate()?;

        let mut layout = MineLayout::empty(config.size());
        let mut collisions = 0usize;
        while layout.mine_count() < config.mines {
            let coords = (
                self.rng.random_range(0..config.rows),
                self.rng.random_range(0..config.cols),
            );
            if !layout.place_mine(coords)? {
                collisions += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board ({} collisions)",
            config.mines,
            config.rows,
            config.cols,
            collisions
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        let mut rng = GameRng::seeded(42);
        let config = MinesweeperConfig::new((9, 9), 10).unwrap();
        let layout = RandomMinefieldGenerator::new(&mut *rng)
            .generate(config)
            .unwrap();
        assert_eq!(layout.mine_count(), 10);
        assert_eq!(layout.iter_coords().filter(|&c| layout[c]).count(), 10);
    }

    #[test]
    fn nearly_full_board_terminates() {
        let mut rng = GameRng::seeded(1);
        let config = MinesweeperConfig::new((4, 4), 15).unwrap();
        let layout = RandomMinefieldGenerator::new(&mut *rng)
            .generate(config)
            .unwrap();
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn full_board_fails_fast() {
        let mut rng = GameRng::seeded(1);
        let config = MinesweeperConfig {
            rows: 2,
            cols: 2,
            mines: 4,
        };
        assert_eq!(
            RandomMinefieldGenerator::new(&mut *rng).generate(config),
            Err(GameError::TooManyMines)
        );
    }
}
