use cgmath::{InnerSpace, Point3, Vector3, Zero};

use crate::constants::physics_constants::*;
use crate::constants::stamina;
use crate::input::InputState;
use crate::world::{ChunkManager, Obstacle};

use super::PlayerState;

/// Advance the observer by one tick against the loaded terrain.
///
/// Total over its inputs: a missing ground hit degrades to free-fall and
/// the kill plane respawns rather than erroring. Runs in a fixed order -
/// stamina, intent, velocity integration, vertical input, obstacle
/// push-out, ground snap, safety net, commit.
pub fn step(player: &mut PlayerState, terrain: &ChunkManager, input: &InputState, dt: f32) {
    // Stamina: boost drains while held, otherwise regenerate
    if input.boost && player.stamina > 0.0 {
        player.drain_stamina(stamina::RUN_DRAIN * 0.4 * dt);
    } else {
        player.regen_stamina(stamina::REGEN * dt);
    }

    // Horizontal intent from the yaw basis
    let forward = Vector3::new(player.yaw.sin(), 0.0, player.yaw.cos());
    let right = Vector3::new(forward.z, 0.0, -forward.x);
    let mut dir = Vector3::zero();
    if input.forward {
        dir += forward;
    }
    if input.backward {
        dir -= forward;
    }
    if input.right {
        dir += right;
    }
    if input.left {
        dir -= right;
    }
    let moving = dir.magnitude2() > 0.0;
    if moving {
        dir = dir.normalize();
    }

    // Velocity: damping, gravity, then the acceleration impulse
    player.velocity.x -= player.velocity.x * HORIZONTAL_DAMPING * dt;
    player.velocity.z -= player.velocity.z * HORIZONTAL_DAMPING * dt;
    player.velocity.y -= GRAVITY * dt;
    if moving {
        let mut speed = WALK_SPEED;
        if input.boost && player.stamina > 0.0 {
            speed *= RUN_MULTIPLIER;
        }
        player.velocity += dir * speed * ACCEL_SCALE * dt;
    }

    // Vertical input: grounded jump or sustained lift
    player.flying = false;
    if input.jump {
        if player.grounded {
            player.velocity.y = JUMP_VELOCITY;
        } else if player.stamina > stamina::FLIGHT_MIN {
            player.velocity.y += FLIGHT_LIFT * dt;
            player.drain_stamina(stamina::FLIGHT_DRAIN * dt);
            player.flying = true;
        }
    }

    let mut next = player.position + player.velocity * dt;

    let obstacles = terrain.obstacles_near(next.x, next.z);
    resolve_obstacles(&mut next, obstacles);

    // Ground: snap onto the surface when the eye line dips below it
    let ground = terrain
        .surface_height(next.x, next.z)
        .unwrap_or(NO_GROUND);
    if next.y < ground + EYE_HEIGHT {
        next.y = ground + EYE_HEIGHT;
        if player.velocity.y < 0.0 {
            player.velocity.y = 0.0;
        }
        player.grounded = true;
    } else {
        player.grounded = false;
    }

    // Safety net: fell through the world
    if next.y < KILL_PLANE {
        next.y = RESPAWN_HEIGHT;
    }

    player.position = next;
}

/// Push the tentative position out of every overlapping circle.
///
/// Positional correction only - velocity is untouched.
pub(crate) fn resolve_obstacles<'a>(
    next: &mut Point3<f32>,
    obstacles: impl Iterator<Item = &'a Obstacle>,
) {
    for obstacle in obstacles {
        let combined = PLAYER_RADIUS + obstacle.radius;
        let dx = next.x - obstacle.x;
        let dz = next.z - obstacle.z;
        let dist_sq = dx * dx + dz * dz;
        if dist_sq < combined * combined {
            let dist = dist_sq.sqrt();
            if dist > 1e-5 {
                let push = (combined - dist) / dist;
                next.x += dx * push;
                next.z += dz * push;
            } else {
                // Dead-center overlap has no outward direction; pick one
                next.x += combined;
            }
        }
    }
}
