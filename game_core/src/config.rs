use glam::Vec2;
use thiserror::Error;

use crate::params::Params;

/// Configuration rejected at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit arena height {arena}")]
    PaddleTallerThanArena { paddle: f32, arena: f32 },

    #[error("max_momentum must be a positive multiple of 10, got {value}")]
    BadMomentumCap { value: f32 },

    #[error("win_score must be at least 1")]
    ZeroWinScore,

    #[error("reset_wait_ticks must be non-negative, got {value}")]
    NegativeResetWait { value: i32 },

    #[error("normalization range for {field} is empty")]
    DegenerateRange { field: &'static str },
}

/// Runtime configuration for one match.
///
/// All speeds are pixels per tick; the tick rate is fixed, so no value in
/// here carries a time unit.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub max_ball_speed_x: f32,
    pub max_ball_speed_y: f32,
    pub max_momentum: f32,
    pub momentum_scaling: f32,
    pub win_score: u32,
    pub reset_wait_ticks: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            max_ball_speed_x: Params::MAX_BALL_SPEED_X,
            max_ball_speed_y: Params::MAX_BALL_SPEED_Y,
            max_momentum: Params::MAX_MOMENTUM,
            momentum_scaling: Params::MOMENTUM_SCALING,
            win_score: Params::WIN_SCORE,
            reset_wait_ticks: Params::RESET_WAIT_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject degenerate configurations before any physics runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
            ("max_ball_speed_x", self.max_ball_speed_x),
            ("max_ball_speed_y", self.max_ball_speed_y),
            ("momentum_scaling", self.momentum_scaling),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::PaddleTallerThanArena {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }

        if !self.max_momentum.is_finite()
            || self.max_momentum <= 0.0
            || self.max_momentum % 10.0 != 0.0
        {
            return Err(ConfigError::BadMomentumCap {
                value: self.max_momentum,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        if self.reset_wait_ticks < 0 {
            return Err(ConfigError::NegativeResetWait {
                value: self.reset_wait_ticks,
            });
        }

        Ok(())
    }

    /// Get X position for a paddle center based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_inset
        } else {
            self.arena_width - self.paddle_inset
        }
    }

    /// Starting position for a paddle center
    pub fn paddle_spawn(&self, player_id: u8) -> Vec2 {
        Vec2::new(self.paddle_x(player_id), self.arena_height / 2.0)
    }

    /// Arena center, where the ball spawns and re-serves from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Speed envelope derived from the independent axis caps
    pub fn max_magnitude(&self) -> f32 {
        (self.max_ball_speed_x * self.max_ball_speed_x
            + self.max_ball_speed_y * self.max_ball_speed_y)
            .sqrt()
    }

    /// Number of deflection buckets the momentum range is cut into
    pub fn momentum_steps(&self) -> u32 {
        let m = self.max_momentum as u32;
        m / gcd(m, 10)
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
