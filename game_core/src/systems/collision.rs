use glam::Vec2;
use hecs::World;
use log::debug;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, GameRng};

/// Bounce the ball off the arena ceiling and floor: vertical velocity flips
/// sign, horizontal is untouched.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() < 0.0 || ball.bottom() > config.arena_height {
            let flipped = Vec2::new(ball.vel.x, -ball.vel.y);
            ball.set_velocity(flipped, config);
            events.wall_bounce = true;
        }
    }
}

/// Raise the informational ceiling/floor flags on paddles whose extent
/// pokes past the arena. These never block movement; rejection is
/// Paddle::advance's job.
pub fn flag_paddle_walls(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.on_ceiling = paddle.top() < 0.0;
        paddle.on_floor = paddle.bottom() > config.arena_height;
    }
}

/// Ball/paddle contact test and deflection.
///
/// Contact needs three things at once: vertical overlap with the paddle's
/// own extent, the ball's near edge crossed past the paddle's near face,
/// and the same edge not yet past the far face. The last guard keeps a
/// ball that has tunneled behind a paddle from re-triggering every tick.
pub fn resolve_paddle_hits(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if !overlaps_vertically(ball, paddle) {
                continue;
            }

            let contact = if paddle.player_id == 0 {
                ball.left() < paddle.right() && ball.left() >= paddle.left()
            } else {
                ball.right() > paddle.left() && ball.right() <= paddle.right()
            };

            if contact {
                ball.resolve_hit(paddle, config, &mut rng.0);
                events.paddle_hit[paddle.player_id as usize] = true;
                debug!(
                    "paddle {} hit, momentum {:.1}, ball vel {:?}",
                    paddle.player_id, paddle.momentum, ball.vel
                );
            }
        }
    }
}

/// Inclusive vertical-extent overlap, each paddle tested against its own
/// height.
fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() > paddle.top() && ball.top() < paddle.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let events = Events::new();
        let rng = GameRng::new(12345);
        (world, config, events, rng)
    }

    fn set_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    #[test]
    fn test_ball_bounces_off_ceiling() {
        let (mut world, config, mut events, _rng) = setup();
        create_ball(&mut world, &config);
        set_ball(&mut world, Vec2::new(320.0, 2.0), Vec2::new(4.0, -3.0));

        bounce_walls(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(4.0, 3.0), "Vertical flips, horizontal holds");
        }
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_ball_bounces_off_floor() {
        let (mut world, config, mut events, _rng) = setup();
        create_ball(&mut world, &config);
        set_ball(
            &mut world,
            Vec2::new(320.0, config.arena_height - 2.0),
            Vec2::new(4.0, 3.0),
        );

        bounce_walls(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(4.0, -3.0));
        }
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_no_bounce_mid_arena() {
        let (mut world, config, mut events, _rng) = setup();
        create_ball(&mut world, &config);
        set_ball(&mut world, Vec2::new(320.0, 240.0), Vec2::new(4.0, 3.0));

        bounce_walls(&mut world, &config, &mut events);

        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_paddle_wall_flags() {
        let (mut world, config, _events, _rng) = setup();
        create_paddle(&mut world, 0, &config);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.pos.y = paddle.half_h - 1.0; // top edge above the ceiling
        }

        flag_paddle_walls(&mut world, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert!(paddle.on_ceiling);
            assert!(!paddle.on_floor);
        }
    }

    #[test]
    fn test_paddle_wall_flags_clear_when_back_in_bounds() {
        let (mut world, config, _events, _rng) = setup();
        create_paddle(&mut world, 0, &config);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.on_ceiling = true;
        }

        flag_paddle_walls(&mut world, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert!(!paddle.on_ceiling);
        }
    }

    #[test]
    fn test_contact_with_right_paddle_reverses_ball() {
        let (mut world, config, mut events, mut rng) = setup();
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);
        // Ball's right edge just past the right paddle's near face.
        let paddle_x = config.paddle_x(1);
        set_ball(
            &mut world,
            Vec2::new(paddle_x - config.paddle_width / 2.0, config.arena_height / 2.0),
            Vec2::new(5.0, 0.0),
        );

        resolve_paddle_hits(&mut world, &config, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.x < 0.0, "Ball reverses off the right paddle");
        }
        assert!(events.paddle_hit[1]);
        assert!(!events.paddle_hit[0]);
    }

    #[test]
    fn test_contact_with_left_paddle_reverses_ball() {
        let (mut world, config, mut events, mut rng) = setup();
        create_paddle(&mut world, 0, &config);
        create_ball(&mut world, &config);
        let paddle_x = config.paddle_x(0);
        set_ball(
            &mut world,
            Vec2::new(paddle_x + config.paddle_width / 2.0, config.arena_height / 2.0),
            Vec2::new(-5.0, 0.0),
        );

        resolve_paddle_hits(&mut world, &config, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.x > 0.0, "Ball reverses off the left paddle");
        }
        assert!(events.paddle_hit[0]);
    }

    #[test]
    fn test_ball_already_behind_paddle_is_missed() {
        let (mut world, config, mut events, mut rng) = setup();
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);
        // Ball fully past the right paddle's far face.
        set_ball(
            &mut world,
            Vec2::new(config.arena_width - 2.0, config.arena_height / 2.0),
            Vec2::new(5.0, 0.0),
        );

        resolve_paddle_hits(&mut world, &config, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, 5.0, "No re-trigger once the ball is through");
        }
        assert!(!events.paddle_hit[1]);
    }

    #[test]
    fn test_no_contact_outside_vertical_extent() {
        let (mut world, config, mut events, mut rng) = setup();
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);
        let paddle_x = config.paddle_x(1);
        // Horizontally in range, vertically well above the paddle.
        set_ball(
            &mut world,
            Vec2::new(paddle_x, config.arena_height / 2.0 - config.paddle_height),
            Vec2::new(5.0, 0.0),
        );

        resolve_paddle_hits(&mut world, &config, &mut events, &mut rng);

        assert!(!events.paddle_hit[1]);
    }

    #[test]
    fn test_overlap_test_uses_each_paddles_own_height() {
        let (mut world, config, mut events, mut rng) = setup();
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);
        // Move the right paddle off-center; a ball level with its new
        // center must still count as overlapping.
        let paddle_y = 100.0;
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.pos.y = paddle_y;
        }
        let paddle_x = config.paddle_x(1);
        set_ball(
            &mut world,
            Vec2::new(paddle_x - config.paddle_width / 2.0, paddle_y),
            Vec2::new(5.0, 0.0),
        );

        resolve_paddle_hits(&mut world, &config, &mut events, &mut rng);

        assert!(events.paddle_hit[1]);
    }
}
