//! Stained-glass mosaic by nearest-seed clustering
//!
//! Seeds are sampled from a seeded `StdRng`, so the same RNG seed always
//! produces the same tiles. Each pixel joins the cluster of its nearest seed and
//! is recoloured with the rounded mean of that cluster's original colours.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::math::rounding::{round_half_up, saturate_i32, squared_distance};
use crate::model::{Color, PixelGrid};

/// A sampled pixel that anchors one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicSeed {
    /// Position as (row, col)
    pub position: (usize, usize),
    /// Original colour at that position
    pub color: Color,
}

/// Pixels assigned to one seed with running channel sums
#[derive(Debug, Clone)]
pub struct MosaicCluster {
    seed: MosaicSeed,
    members: Vec<(usize, usize)>,
    sums: [u64; Color::CHANNELS],
}

impl MosaicCluster {
    /// Start an empty cluster for `seed`
    pub const fn new(seed: MosaicSeed) -> Self {
        Self {
            seed,
            members: Vec::new(),
            sums: [0; Color::CHANNELS],
        }
    }

    /// Record a member pixel and its original colour
    pub fn add(&mut self, position: (usize, usize), color: Color) {
        self.members.push(position);
        for (sum, channel) in self.sums.iter_mut().zip(color.channels()) {
            *sum += u64::from(channel);
        }
    }

    /// The seed this cluster grew from
    pub const fn seed(&self) -> &MosaicSeed {
        &self.seed
    }

    /// Member positions in assignment order
    pub fn members(&self) -> &[(usize, usize)] {
        &self.members
    }

    /// Number of member pixels
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no pixel chose this seed
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Rounded mean colour of the members, keeping the seed's alpha
    ///
    /// Returns `None` for an empty cluster.
    pub fn average(&self) -> Option<Color> {
        if self.is_empty() {
            return None;
        }
        let count = self.members.len() as f64;
        let rgb = self
            .sums
            .map(|sum| saturate_i32(round_half_up(sum as f64 / count)));
        Some(self.seed.color.with_rgb(rgb))
    }
}

/// Mosaic parameters: how many seeds to sample and the RNG seed to sample with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mosaic {
    seed_count: usize,
    rng_seed: u64,
}

impl Mosaic {
    /// Configure a mosaic
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `seed_count` is zero
    pub fn new(seed_count: usize, rng_seed: u64) -> Result<Self> {
        if seed_count == 0 {
            return Err(invalid_parameter(
                "seed_count",
                &seed_count,
                &"seed count must be positive",
            ));
        }
        Ok(Self {
            seed_count,
            rng_seed,
        })
    }

    /// Number of seeds sampled
    pub const fn seed_count(&self) -> usize {
        self.seed_count
    }

    /// RNG seed used for sampling
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Sample seed positions uniformly over the grid
    ///
    /// Each draw takes a column then a row. Repeated positions are kept; the
    /// later duplicate never wins a pixel and ends up with an empty cluster.
    ///
    /// # Errors
    ///
    /// Propagates pixel access errors; these cannot occur for sampled positions
    pub fn select_seeds(&self, grid: &PixelGrid) -> Result<Vec<MosaicSeed>> {
        let mut rng = StdRng::seed_from_u64(self.rng_seed);
        let (height, width) = grid.dimensions();

        let mut seeds = Vec::with_capacity(self.seed_count);
        for _ in 0..self.seed_count {
            let col = rng.random_range(0..width);
            let row = rng.random_range(0..height);
            seeds.push(MosaicSeed {
                position: (row, col),
                color: grid.get(row, col)?,
            });
        }
        Ok(seeds)
    }

    /// Assign every pixel of `grid` to its nearest seed
    ///
    /// Clusters are returned in seed order, one per seed.
    pub fn cluster(grid: &PixelGrid, seeds: &[MosaicSeed]) -> Vec<MosaicCluster> {
        let mut clusters: Vec<MosaicCluster> = seeds.iter().copied().map(MosaicCluster::new).collect();

        for (position, color) in grid.indexed_iter() {
            if let Some(cluster) =
                nearest_seed(seeds, position).and_then(|index| clusters.get_mut(index))
            {
                cluster.add(position, color);
            }
        }

        clusters
    }

    /// Replace every pixel with its cluster's average colour
    ///
    /// Takes ownership because the grid is rewritten in place; clone first to
    /// keep the original.
    ///
    /// # Errors
    ///
    /// Propagates pixel access errors; these cannot occur for a valid grid
    pub fn apply(&self, grid: PixelGrid) -> Result<PixelGrid> {
        log::debug!(
            "building mosaic of {}x{} grid from {} seeds (rng seed {})",
            grid.height(),
            grid.width(),
            self.seed_count,
            self.rng_seed
        );

        let seeds = self.select_seeds(&grid)?;
        let clusters = Self::cluster(&grid, &seeds);

        let mut grid = grid;
        for cluster in &clusters {
            let Some(average) = cluster.average() else {
                log::trace!("seed at {:?} has an empty cluster", cluster.seed().position);
                continue;
            };
            for &(row, col) in cluster.members() {
                grid.set(row, col, average)?;
            }
        }
        Ok(grid)
    }
}

/// Index of the seed closest to `position`
///
/// Equidistant seeds resolve to the one that was sampled first.
pub fn nearest_seed(seeds: &[MosaicSeed], position: (usize, usize)) -> Option<usize> {
    seeds
        .iter()
        .enumerate()
        .min_by_key(|(_, seed)| squared_distance(seed.position, position))
        .map(|(index, _)| index)
}
