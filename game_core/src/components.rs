use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::math;
use crate::params::Params;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub pos: Vec2,     // center
    pub half_w: f32,
    pub half_h: f32,
    pub vel: Vec2,
    /// Accumulator for sustained vertical movement; biases ball deflection
    /// on contact. Always within [-max_momentum, max_momentum].
    pub momentum: f32,
    pub on_ceiling: bool,
    pub on_floor: bool,
}

impl Paddle {
    pub fn new(player_id: u8, config: &Config) -> Self {
        Self {
            player_id,
            pos: config.paddle_spawn(player_id),
            half_w: config.paddle_width / 2.0,
            half_h: config.paddle_height / 2.0,
            vel: Vec2::ZERO,
            momentum: 0.0,
            on_ceiling: false,
            on_floor: false,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.half_h
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_h
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.half_w
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.half_w
    }

    /// Replace the paddle's velocity for this tick.
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    /// Step the paddle by its velocity.
    ///
    /// A move that would push either vertical edge outside the arena is
    /// rejected whole: position and momentum both keep their previous
    /// values (hard wall stop, not a clamp to the edge).
    pub fn advance(&mut self, config: &Config) {
        let next = self.pos + self.vel;
        if next.y - self.half_h < 0.0 || next.y + self.half_h > config.arena_height {
            return;
        }
        self.increment_momentum(config);
        self.pos = next;
    }

    /// Accumulate momentum toward the current vertical velocity.
    ///
    /// Zero vertical velocity clears momentum immediately, no coasting. A
    /// direction reversal while saturated at the cap snaps momentum to zero
    /// for that tick instead of winding down through intermediate values.
    fn increment_momentum(&mut self, config: &Config) {
        if self.vel.y == 0.0 {
            self.momentum = 0.0;
            return;
        }

        let next = self.momentum + self.vel.y;
        if self.momentum.abs() >= config.max_momentum && next.abs() < self.momentum.abs() {
            self.momentum = 0.0;
            return;
        }

        self.momentum = math::clamp_abs(
            self.momentum + self.vel.y * config.momentum_scaling,
            config.max_momentum,
        );
    }
}

/// Ball component - the ball in play
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
    pub half_w: f32,
    pub half_h: f32,
    /// Ticks left until the next serve; -1 once the serve has fired.
    pub reset_wait: i32,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.ball_spawn(),
            vel: Vec2::ZERO,
            half_w: config.ball_width / 2.0,
            half_h: config.ball_height / 2.0,
            reset_wait: 0,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.half_h
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_h
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.half_w
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.half_w
    }

    /// Set velocity and re-clamp. Every velocity mutation goes through here.
    pub fn set_velocity(&mut self, vel: Vec2, config: &Config) {
        self.vel = vel;
        self.clamp_speed(config);
    }

    /// Clamp each axis to its cap, then clamp the overall magnitude to the
    /// envelope derived from the axis caps.
    ///
    /// The magnitude pass re-derives the heading with atan2 so the clamp
    /// holds in every quadrant; it is skipped entirely when vx is zero (the
    /// heading would be undefined), leaving the velocity axis-clamped only.
    pub fn clamp_speed(&mut self, config: &Config) {
        self.vel = math::clamp_axes(self.vel, config.max_ball_speed_x, config.max_ball_speed_y);

        if self.vel.x == 0.0 {
            return;
        }

        let max_magnitude = config.max_magnitude();
        if self.vel.length() > max_magnitude {
            let angle = self.vel.y.atan2(self.vel.x);
            self.vel = Vec2::new(angle.cos(), angle.sin()) * max_magnitude;
        }
    }

    /// Unconditional integration; wall response lives in the collision pass.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Score/reset/serve ladder, run once per tick while serving is open.
    ///
    /// Leaving the arena horizontally is a score event: the ball freezes at
    /// center and the countdown starts. The countdown ticks down to 0, fires
    /// the serve exactly once, then parks at -1. Returns true on the tick
    /// the serve fired.
    pub fn reset_or_serve(&mut self, config: &Config, rng: &mut impl Rng) -> bool {
        if self.left() < 0.0 || self.right() > config.arena_width {
            self.set_velocity(Vec2::ZERO, config);
            self.pos = config.ball_spawn();
            self.reset_wait = config.reset_wait_ticks;
        } else if self.reset_wait > 0 {
            self.reset_wait -= 1;
        } else if self.reset_wait == 0 {
            self.reset_wait = -1;
            self.serve(config, rng);
            return true;
        }
        false
    }

    /// Launch from center: horizontal speed drawn uniformly from the serve
    /// set, vertical speed zero.
    pub fn serve(&mut self, config: &Config, rng: &mut impl Rng) {
        let speed_x = Params::SERVE_SPEEDS
            .choose(rng)
            .copied()
            .unwrap_or(Params::SERVE_SPEEDS[0]);
        self.set_velocity(Vec2::new(speed_x, 0.0), config);
    }

    /// Momentum-driven deflection off a paddle.
    ///
    /// Horizontal speed reverses sign and picks up a random scale in
    /// [1.0, 1.5). The vertical increment comes from the paddle's momentum
    /// alone: the reachable range [0, |vx| * max_momentum / 100) is cut into
    /// momentum buckets and the paddle's momentum selects one, signed by its
    /// own direction. Zero momentum returns the ball flat.
    pub fn resolve_hit(&mut self, paddle: &Paddle, config: &Config, rng: &mut impl Rng) {
        let x_scale: f32 = rng.gen_range(1.0..1.5);

        let steps = config.momentum_steps();
        let max_y_speed = self.vel.x.abs() * (config.max_momentum / 100.0);
        let step_size = max_y_speed / steps as f32;

        let y_increment = if paddle.momentum == 0.0 {
            0.0
        } else {
            // The raw bucket index underflows for small momentum and lands
            // one past the end at exact saturation; clamp instead of
            // indexing blind.
            let bucket = ((paddle.momentum.abs() / steps as f32).floor() as i64 - 1)
                .clamp(0, steps as i64 - 1);
            (bucket as f32 * step_size).copysign(paddle.momentum)
        };

        let new_vel = Vec2::new(-(self.vel.x * x_scale), self.vel.y + y_increment);
        self.set_velocity(new_vel, config);
    }
}

/// Movement intent for a paddle, refreshed from the input queue. The intent
/// holds between ticks until a new command arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = hold, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
