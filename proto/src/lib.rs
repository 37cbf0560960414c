//! Boundary messages between the simulation core and its collaborators
//! (renderer, policy driver)
//!
//! Uses postcard for efficient binary serialization

use postcard::{from_bytes, to_allocvec};

use game_core::{MatchPhase, Snapshot};

/// Per-paddle control command
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    Up,
    Hold,
    Down,
}

impl Command {
    /// Direction as the core understands it: -1 = up, 0 = hold, 1 = down
    pub fn dir(self) -> i8 {
        match self {
            Command::Up => -1,
            Command::Hold => 0,
            Command::Down => 1,
        }
    }

    /// Out-of-range raw directions collapse to Hold.
    pub fn from_dir(dir: i8) -> Self {
        match dir {
            -1 => Command::Up,
            1 => Command::Down,
            _ => Command::Hold,
        }
    }
}

/// Match phase mirrored onto the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    PreServe,
    InPlay,
    MatchOver,
}

impl From<MatchPhase> for Phase {
    fn from(phase: MatchPhase) -> Self {
        match phase {
            MatchPhase::PreServe => Phase::PreServe,
            MatchPhase::InPlay => Phase::InPlay,
            MatchPhase::MatchOver => Phase::MatchOver,
        }
    }
}

// ============================================================================
// Control Messages (collaborator to core)
// ============================================================================

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum ControlMsg {
    /// Paddle input for one tick
    Input { paddle_id: u8, command: Command },

    /// Open serving (or restart a finished match)
    Serve,

    /// Restart a finished match
    Restart,
}

// ============================================================================
// State Messages (core to collaborator)
// ============================================================================

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum StateMsg {
    /// Tick state snapshot
    State(StateSnapshot),

    /// Match ended
    MatchOver {
        winner: u8, // 0 = left, 1 = right
    },
}

/// Flattened snapshot of one tick's outcome
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub momentum_left: f32,
    pub momentum_right: f32,
    pub score_left: u32,
    pub score_right: u32,
    pub phase: Phase,
}

impl From<Snapshot> for StateSnapshot {
    fn from(snap: Snapshot) -> Self {
        Self {
            tick: snap.tick,
            ball_x: snap.ball_pos.x,
            ball_y: snap.ball_pos.y,
            ball_vx: snap.ball_vel.x,
            ball_vy: snap.ball_vel.y,
            paddle_left_y: snap.paddle_y[0],
            paddle_right_y: snap.paddle_y[1],
            momentum_left: snap.paddle_momentum[0],
            momentum_right: snap.paddle_momentum[1],
            score_left: snap.scores[0],
            score_right: snap.scores[1],
            phase: snap.phase.into(),
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl ControlMsg {
    /// Serialize control message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize control message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl StateMsg {
    /// Serialize state message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize state message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
