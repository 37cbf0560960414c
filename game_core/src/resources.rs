use glam::Vec2;

/// One competitor: a name, a score and a win flag.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub win: bool,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: 0,
            win: false,
        }
    }

    pub fn score_points(&mut self, points: u32) {
        self.score += points;
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.win = false;
    }
}

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Ball frozen at center, waiting for the external serve command
    PreServe,
    /// Physics ticking; the ball resets and re-serves itself on score
    InPlay,
    /// A player reached the threshold; physics frozen until restart
    MatchOver,
}

/// Match bookkeeping that lives outside the ECS world.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub players: [Player; 2],
    pub first_serve_issued: bool,
    pub phase: MatchPhase,
    pub tick: u64,
}

impl MatchState {
    pub fn new(left_name: &str, right_name: &str) -> Self {
        Self {
            players: [Player::new(left_name), Player::new(right_name)],
            first_serve_issued: false,
            phase: MatchPhase::PreServe,
            tick: 0,
        }
    }

    pub fn score_for(&mut self, player: usize) {
        self.players[player].score_points(1);
    }

    /// Threshold check, run once per tick after movement. The first player
    /// at or past the threshold wins; at most one win flag is ever set.
    pub fn check_win(&mut self, win_score: u32) -> Option<u8> {
        if self.phase == MatchPhase::MatchOver {
            return self.winner();
        }
        for (id, player) in self.players.iter_mut().enumerate() {
            if player.score >= win_score {
                player.win = true;
                self.phase = MatchPhase::MatchOver;
                return Some(id as u8);
            }
        }
        None
    }

    pub fn winner(&self) -> Option<u8> {
        self.players.iter().position(|p| p.win).map(|id| id as u8)
    }

    /// Back to pre-serve with zeroed scores and flags. Names survive.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.first_serve_issued = false;
        self.phase = MatchPhase::PreServe;
        self.tick = 0;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_hit: [bool; 2],
    pub scored: [bool; 2],
    pub served: bool,
    pub winner: Option<u8>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-tick command queue filled by the input collaborators.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub commands: Vec<(u8, i8)>, // (paddle_id, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push_command(&mut self, paddle_id: u8, dir: i8) {
        self.commands.push((paddle_id, dir));
    }
}

/// Seedable random source; a fixed seed replays the identical match.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Read-only view of one tick's outcome, consumed by renderers and
/// decision-making collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub paddle_y: [f32; 2],
    pub paddle_vy: [f32; 2],
    pub paddle_momentum: [f32; 2],
    pub on_ceiling: [bool; 2],
    pub on_floor: [bool; 2],
    pub scores: [u32; 2],
    pub wins: [bool; 2],
    pub phase: MatchPhase,
}
