use mazer_core::Dims;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::backtracker::{GenError, Maze, MazeGen, maze_dims};

/// Parameters for one maze.
///
/// Dimensions are taken as given and made odd at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    /// Fixed seed for a reproducible maze; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 21,
            cols: 31,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Builder: fix the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The extent the generated grid will have.
    pub fn dims(&self) -> Result<Dims, GenError> {
        maze_dims(self.rows, self.cols)
    }

    /// Generate a maze with these parameters.
    pub fn generate(&self) -> Result<Maze, GenError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        MazeGen::with_rng(rng).generate(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MazeConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (21, 31));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.dims(), Ok(Dims::new(21, 31)));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let cfg = MazeConfig {
            rows: 12,
            cols: 16,
            ..Default::default()
        }
        .with_seed(77);
        let a = cfg.generate().unwrap();
        let b = cfg.generate().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.grid.dims(), Dims::new(13, 17));
    }

    #[test]
    fn unseeded_config_generates() {
        let m = MazeConfig::default().generate().unwrap();
        assert_eq!(m.grid.dims(), Dims::new(21, 31));
        assert!(m.grid.is_passable(m.start));
        assert!(m.grid.is_passable(m.end));
        assert_ne!(m, MazeConfig::default().generate().unwrap());
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let cfg = MazeConfig {
            rows: 0,
            cols: 9,
            seed: Some(1),
        };
        assert!(cfg.dims().is_err());
        assert_eq!(
            cfg.generate(),
            Err(GenError::InvalidDimensions { rows: 0, cols: 9 })
        );

        let huge = MazeConfig {
            rows: i32::MAX,
            ..Default::default()
        };
        assert_eq!(
            huge.dims(),
            Err(GenError::TooLarge {
                rows: i32::MAX,
                cols: 31
            })
        );
        assert!(huge.generate().is_err());
    }
}
