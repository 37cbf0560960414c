use hecs::World;
use log::info;

use crate::components::{Ball, Paddle};
use crate::config::{Config, ConfigError};
use crate::resources::{Events, GameRng, InputQueue, MatchPhase, MatchState, Snapshot};
use crate::{create_ball, create_paddle, step};

/// Owns the world and every resource one match needs. External
/// collaborators drive it with commands and read back snapshots; nothing
/// else mutates the simulation.
pub struct Game {
    pub world: World,
    pub config: Config,
    pub state: MatchState,
    pub events: Events,
    pub queue: InputQueue,
    pub rng: GameRng,
}

impl Game {
    /// Validate the configuration and set up a fresh match at pre-serve.
    pub fn new(
        config: Config,
        left_name: &str,
        right_name: &str,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        create_paddle(&mut world, 0, &config);
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);

        Ok(Self {
            world,
            config,
            state: MatchState::new(left_name, right_name),
            events: Events::new(),
            queue: InputQueue::new(),
            rng: GameRng::new(seed),
        })
    }

    /// Queue a control command for one paddle: -1 up, 0 hold, 1 down.
    pub fn push_command(&mut self, paddle_id: u8, dir: i8) {
        self.queue.push_command(paddle_id, dir);
    }

    /// Open serving. Before the first serve the ball sits frozen at
    /// center; afterwards every score re-serves automatically. Once the
    /// match is over the same command restarts it instead.
    pub fn issue_serve(&mut self) {
        match self.state.phase {
            MatchPhase::PreServe => {
                self.state.first_serve_issued = true;
                self.state.phase = MatchPhase::InPlay;
                info!("first serve issued");
            }
            MatchPhase::MatchOver => self.restart(),
            MatchPhase::InPlay => {}
        }
    }

    /// Advance the simulation by one fixed tick.
    pub fn tick(&mut self) {
        let was_over = self.state.phase == MatchPhase::MatchOver;
        step(
            &mut self.world,
            &self.config,
            &mut self.state,
            &mut self.events,
            &mut self.queue,
            &mut self.rng,
        );
        if !was_over {
            if let Some(winner) = self.events.winner {
                info!("{} wins the match", self.state.players[winner as usize].name);
            }
        }
    }

    /// Tear the match back to pre-serve: fresh paddles and ball at their
    /// starting positions, zeroed scores and flags.
    pub fn restart(&mut self) {
        if self.state.phase != MatchPhase::MatchOver {
            return;
        }
        info!("restarting match");

        self.world.clear();
        create_paddle(&mut self.world, 0, &self.config);
        create_paddle(&mut self.world, 1, &self.config);
        create_ball(&mut self.world, &self.config);

        self.state.reset();
        self.events.clear();
        self.queue.clear();
    }

    /// Read-only view of the current tick for renderers and policies.
    pub fn snapshot(&self) -> Snapshot {
        let (ball_pos, ball_vel) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
            .unwrap_or((self.config.ball_spawn(), glam::Vec2::ZERO));

        let mut paddle_y = [self.config.arena_height / 2.0; 2];
        let mut paddle_vy = [0.0; 2];
        let mut paddle_momentum = [0.0; 2];
        let mut on_ceiling = [false; 2];
        let mut on_floor = [false; 2];

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            let id = paddle.player_id as usize;
            if id < 2 {
                paddle_y[id] = paddle.pos.y;
                paddle_vy[id] = paddle.vel.y;
                paddle_momentum[id] = paddle.momentum;
                on_ceiling[id] = paddle.on_ceiling;
                on_floor[id] = paddle.on_floor;
            }
        }

        Snapshot {
            tick: self.state.tick,
            ball_pos,
            ball_vel,
            paddle_y,
            paddle_vy,
            paddle_momentum,
            on_ceiling,
            on_floor,
            scores: [self.state.players[0].score, self.state.players[1].score],
            wins: [self.state.players[0].win, self.state.players[1].win],
            phase: self.state.phase,
        }
    }
}
