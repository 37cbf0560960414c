//! Decision-making collaborators: normalized observations over the raw
//! tick snapshot, and the policy interface a real controller would stand
//! behind. The stock policy is a uniform-random placeholder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use game_core::{Config, ConfigError, Snapshot};
use proto::Command;

/// Valid ranges used to squash raw state into unit-interval observations.
///
/// Read-only once built; every range is checked for degeneracy here so the
/// linear maps downstream are always defined.
#[derive(Debug, Clone, Copy)]
pub struct GameStateParameters {
    pub arena_width: f32,
    pub arena_height: f32,
    pub max_paddle_speed: f32,
    pub max_momentum: f32,
    pub max_ball_speed_x: f32,
    pub max_ball_speed_y: f32,
}

impl GameStateParameters {
    pub fn new(
        arena_width: f32,
        arena_height: f32,
        max_paddle_speed: f32,
        max_momentum: f32,
        max_ball_speed_x: f32,
        max_ball_speed_y: f32,
    ) -> Result<Self, ConfigError> {
        let ranges = [
            ("arena_width", arena_width),
            ("arena_height", arena_height),
            ("max_paddle_speed", max_paddle_speed),
            ("max_momentum", max_momentum),
            ("max_ball_speed_x", max_ball_speed_x),
            ("max_ball_speed_y", max_ball_speed_y),
        ];
        for (field, value) in ranges {
            // A non-positive bound collapses or inverts the range.
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::DegenerateRange { field });
            }
        }

        Ok(Self {
            arena_width,
            arena_height,
            max_paddle_speed,
            max_momentum,
            max_ball_speed_x,
            max_ball_speed_y,
        })
    }

    /// Derive the observation ranges from a simulation config.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(
            config.arena_width,
            config.arena_height,
            config.paddle_speed,
            config.max_momentum,
            config.max_ball_speed_x,
            config.max_ball_speed_y,
        )
    }
}

/// One side's view of the arena, every field linearly mapped to [0, 1]
/// over its configured range. Positions map over [0, extent]; speeds and
/// momentum map over [-max, max], so 0.5 means "at rest".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub own_y: f32,
    pub own_vy: f32,
    pub own_momentum: f32,
    pub opponent_y: f32,
    pub opponent_momentum: f32,
}

impl Observation {
    /// Build the observation for one side of the arena.
    pub fn from_snapshot(snap: &Snapshot, paddle_id: u8, params: &GameStateParameters) -> Self {
        let own = (paddle_id as usize).min(1);
        let other = 1 - own;

        Self {
            ball_x: normalize(snap.ball_pos.x, 0.0, params.arena_width),
            ball_y: normalize(snap.ball_pos.y, 0.0, params.arena_height),
            ball_vx: normalize(
                snap.ball_vel.x,
                -params.max_ball_speed_x,
                params.max_ball_speed_x,
            ),
            ball_vy: normalize(
                snap.ball_vel.y,
                -params.max_ball_speed_y,
                params.max_ball_speed_y,
            ),
            own_y: normalize(snap.paddle_y[own], 0.0, params.arena_height),
            own_vy: normalize(
                snap.paddle_vy[own],
                -params.max_paddle_speed,
                params.max_paddle_speed,
            ),
            own_momentum: normalize(
                snap.paddle_momentum[own],
                -params.max_momentum,
                params.max_momentum,
            ),
            opponent_y: normalize(snap.paddle_y[other], 0.0, params.arena_height),
            opponent_momentum: normalize(
                snap.paddle_momentum[other],
                -params.max_momentum,
                params.max_momentum,
            ),
        }
    }
}

/// Linear map of value into [0, 1] over [min, max]. Range width is
/// validated when GameStateParameters is built, so the division here is
/// always defined.
fn normalize(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// A decision maker: one command per observation.
pub trait Policy {
    fn decide(&mut self, observation: &Observation) -> Command;
}

/// Placeholder policy: a uniform-random direction each tick, no lookahead.
/// Stands in the slot a trained controller would occupy.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn decide(&mut self, _observation: &Observation) -> Command {
        match self.rng.gen_range(0..3) {
            0 => Command::Up,
            1 => Command::Down,
            _ => Command::Hold,
        }
    }
}
