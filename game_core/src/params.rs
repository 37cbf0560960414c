/// Default tuning parameters for the simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per tick
    pub const PADDLE_INSET: f32 = 20.0; // distance from the goal line

    // Ball
    pub const BALL_WIDTH: f32 = 10.0;
    pub const BALL_HEIGHT: f32 = 10.0;
    pub const MAX_BALL_SPEED_X: f32 = 10.0;
    pub const MAX_BALL_SPEED_Y: f32 = 20.0;
    pub const SERVE_SPEEDS: [f32; 4] = [2.0, 3.0, -2.0, -3.0];

    // Momentum
    pub const MAX_MOMENTUM: f32 = 100.0; // must be a multiple of 10
    pub const MOMENTUM_SCALING: f32 = 0.5; // 1.0 is the standard accumulation rate

    // Match
    pub const WIN_SCORE: u32 = 5;
    pub const TICK_RATE: u32 = 60; // fixed ticks per second
    pub const RESET_WAIT_TICKS: i32 = 60; // one game-second between score and serve
}
