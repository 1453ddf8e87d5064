use crate::builder::LabyrinthBuilder;
use crate::constants::{DEFAULT_LEVELS, DEFAULT_ROOMS_PER_LEVEL, MAX_REFACTOR_ATTEMPTS};
use crate::labyrinth::Labyrinth;
use crate::room::{Dimensions, RoomId};
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub struct LabyrinthConfig {
    pub levels: u32,                // Number of stacked levels
    pub rooms_per_level: u32,       // Ring rooms plus the hub on each level
    pub extra_connections: usize,   // Passages added once connected; they introduce cycles
    pub max_refactor_attempts: u32, // Refactors allowed before generation gives up
    pub seed: Option<u64>,          // Seed value for random labyrinth generation
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        LabyrinthConfig {
            levels: DEFAULT_LEVELS,
            rooms_per_level: DEFAULT_ROOMS_PER_LEVEL,
            extra_connections: 0,
            max_refactor_attempts: MAX_REFACTOR_ATTEMPTS,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LabyrinthError {
    #[error("invalid parameters: {levels} level(s) of {rooms_per_level} room(s), need at least 2 levels of 4 rooms")]
    InvalidParameters { levels: u32, rooms_per_level: u32 },
    #[error("attempted to refactor {attempts} times; all failed")]
    RefactorLimitExceeded { attempts: u32 },
    #[error("internal consistency failure: {0}")]
    InternalConsistency(String),
    #[error("no path from room {from} to room {to}")]
    NoPath { from: RoomId, to: RoomId },
    #[error("room {0} is not part of the labyrinth")]
    UnknownRoom(RoomId),
}

/// Generates a labyrinth of the given size with the default settings.
pub fn generate(levels: u32, rooms_per_level: u32) -> Result<Labyrinth, LabyrinthError> {
    generate_labyrinth(LabyrinthConfig {
        levels,
        rooms_per_level,
        ..Default::default()
    })
}

pub fn generate_labyrinth(config: LabyrinthConfig) -> Result<Labyrinth, LabyrinthError> {
    let mut rng: rand::rngs::StdRng = config
        .seed
        .map(SeedableRng::seed_from_u64)
        .unwrap_or_else(rand::rngs::StdRng::from_entropy);
    generate_labyrinth_with_rng(config, &mut rng)
}

/// Same as [`generate_labyrinth`], drawing from `rng` instead of `config.seed`.
pub fn generate_labyrinth_with_rng<R>(
    config: LabyrinthConfig,
    rng: &mut R,
) -> Result<Labyrinth, LabyrinthError>
where
    R: Rng + ?Sized,
{
    // validate
    let dimensions = Dimensions::new(config.levels, config.rooms_per_level)?;

    let mut builder = LabyrinthBuilder::new(dimensions, config.max_refactor_attempts);
    builder.grow(rng)?;
    if config.extra_connections > 0 {
        builder.add_extra_connections(config.extra_connections, rng);
    }
    if builder.refactor_count() > 0 {
        log::info!(
            "The labyrinth was refactored {} time(s).",
            builder.refactor_count()
        );
    }
    builder.check_single_component()?;
    builder.finish()
}
