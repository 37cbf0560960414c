use glam::Vec2;
use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::InputQueue;

/// Drain queued commands into paddle intents, then turn intents into
/// velocities. Raw directions outside {-1, 0, 1} are clamped rather than
/// trusted. A paddle with no queued command keeps its previous intent.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue, config: &Config) {
    for &(paddle_id, dir) in &queue.commands {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player_id == paddle_id {
                intent.dir = dir.clamp(-1, 1);
            }
        }
    }
    queue.clear();

    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.set_velocity(Vec2::new(0.0, intent.dir as f32 * config.paddle_speed));
    }
}
