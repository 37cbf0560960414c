use hecs::World;
use log::debug;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, MatchState};

/// Award a point when the ball has crossed a goal line: left exit scores
/// for player 1 (right side), right exit for player 0 (left side).
///
/// The ball is not repositioned here; the serve stage recenters it in the
/// same tick, so one crossing can never score twice.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.left() < 0.0 {
            state.score_for(1);
            events.scored[1] = true;
            debug!("point to {} ({})", state.players[1].name, state.players[1].score);
        }
        if ball.right() > config.arena_width {
            state.score_for(0);
            events.scored[0] = true;
            debug!("point to {} ({})", state.players[0].name, state.players[0].score);
        }
    }
}
