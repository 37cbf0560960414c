use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;

/// Apply paddle movement; bounds rejection and momentum accumulation live
/// inside the paddle itself.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance(config);
    }
}

/// Integrate the ball by its velocity.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
