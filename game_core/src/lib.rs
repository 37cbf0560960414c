pub mod components;
pub mod config;
pub mod game;
pub mod math;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the deterministic simulation.
///
/// Stage order is load-bearing: inputs, wall bounce, scoring, paddle wall
/// flags, paddle contact, serve ladder, integration, win check. Collision
/// stages read pre-integration positions; the win check runs after
/// movement. A finished match freezes everything until restart.
pub fn step(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    if state.phase == MatchPhase::MatchOver {
        return;
    }

    events.clear();
    state.tick += 1;

    // 1. Ingest inputs (apply to paddle intents and velocities)
    ingest_inputs(world, queue, config);

    // 2. Collision resolution against current positions
    bounce_walls(world, config, events);
    check_scoring(world, config, state, events);
    flag_paddle_walls(world, config);
    resolve_paddle_hits(world, config, events, rng);

    // 3. Score-reset countdown and serve
    update_serve(world, config, state, events, rng);

    // 4. Velocity integration
    move_paddles(world, config);
    move_ball(world);

    // 5. Win check
    if let Some(winner) = state.check_win(config.win_score) {
        events.winner = Some(winner);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config),))
}
