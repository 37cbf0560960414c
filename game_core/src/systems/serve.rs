use hecs::World;
use log::debug;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, MatchState};

/// Run the ball's score-reset/countdown/serve ladder. Inert until the
/// first serve command has been issued; from then on every score feeds the
/// next serve automatically.
pub fn update_serve(
    world: &mut World,
    config: &Config,
    state: &MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if !state.first_serve_issued {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.reset_or_serve(config, &mut rng.0) {
            events.served = true;
            debug!("serving, ball vel {:?}", ball.vel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use crate::params::Params;
    use glam::Vec2;

    fn setup(first_serve_issued: bool) -> (World, Config, MatchState, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let mut state = MatchState::new("left", "right");
        state.first_serve_issued = first_serve_issued;
        let events = Events::new();
        let rng = GameRng::new(12345);
        (world, config, state, events, rng)
    }

    #[test]
    fn test_inert_before_first_serve() {
        let (mut world, config, state, mut events, mut rng) = setup(false);
        create_ball(&mut world, &config);

        update_serve(&mut world, &config, &state, &mut events, &mut rng);

        assert!(!events.served);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::ZERO);
            assert_eq!(ball.reset_wait, 0, "Countdown untouched before first serve");
        }
    }

    #[test]
    fn test_first_tick_serves_immediately() {
        let (mut world, config, state, mut events, mut rng) = setup(true);
        create_ball(&mut world, &config);

        update_serve(&mut world, &config, &state, &mut events, &mut rng);

        assert!(events.served);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(Params::SERVE_SPEEDS.contains(&ball.vel.x));
            assert_eq!(ball.vel.y, 0.0);
            assert_eq!(ball.reset_wait, -1);
        }
    }

    #[test]
    fn test_countdown_runs_one_tick_at_a_time() {
        let (mut world, config, state, mut events, mut rng) = setup(true);
        create_ball(&mut world, &config);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.reset_wait = 3;
        }

        update_serve(&mut world, &config, &state, &mut events, &mut rng);
        assert!(!events.served);
        update_serve(&mut world, &config, &state, &mut events, &mut rng);
        update_serve(&mut world, &config, &state, &mut events, &mut rng);
        assert!(!events.served);

        // Fourth tick: the countdown has reached zero, the serve fires.
        update_serve(&mut world, &config, &state, &mut events, &mut rng);
        assert!(events.served);
    }

    #[test]
    fn test_exit_restarts_countdown() {
        let (mut world, config, state, mut events, mut rng) = setup(true);
        create_ball(&mut world, &config);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.reset_wait = -1;
            ball.pos = Vec2::new(-20.0, 240.0);
            ball.vel = Vec2::new(-5.0, 0.0);
        }

        update_serve(&mut world, &config, &state, &mut events, &mut rng);

        assert!(!events.served);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_spawn());
            assert_eq!(ball.vel, Vec2::ZERO);
            assert_eq!(ball.reset_wait, config.reset_wait_ticks);
        }
    }
}
