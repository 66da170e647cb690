//! Objects domain: hazards that send the player back to spawn, and the saws' patrol.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::RespawnRequested;
use crate::movement::Player;
use crate::objects::player_contact;

/// Touching this sends the player back to spawn.
#[derive(Component, Debug, Default)]
pub struct Hazard;

/// Back-and-forth motion between a start point and a turn point.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Patrol {
    pub start: Vec2,
    pub turn_point: Vec2,
    pub speed: f32,
    target: Vec2,
}

impl Patrol {
    pub fn new(start: Vec2, turn_point: Vec2, speed: f32) -> Self {
        Self {
            start,
            turn_point,
            speed,
            target: turn_point,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Heading right toward the current target, used to flip the sprite.
    pub fn faces_right(&self, position: Vec2) -> bool {
        self.target.x > position.x
    }

    /// Move from `position` toward the target and return the new position,
    /// swapping targets once a step no longer makes progress.
    pub fn step(&mut self, position: Vec2, dt: f32) -> Vec2 {
        let next = position.move_towards(self.target, self.speed * dt.max(0.0));
        let to_target = self.target - position;
        let moved = next - position;

        if to_target.dot(moved) <= 0.0 {
            self.target = if self.target == self.turn_point {
                self.start
            } else {
                self.turn_point
            };
        }
        next
    }
}

pub(crate) fn move_saws(
    time: Res<Time>,
    mut saws: Query<(&mut Patrol, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (mut patrol, mut transform, mut sprite) in &mut saws {
        let next = patrol.step(transform.translation.truncate(), dt);
        transform.translation.x = next.x;
        transform.translation.y = next.y;

        let flip = patrol.faces_right(next);
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

pub(crate) fn hazard_contact(
    mut collisions: MessageReader<CollisionStart>,
    players: Query<(), With<Player>>,
    hazards: Query<(), With<Hazard>>,
    mut respawns: MessageWriter<RespawnRequested>,
) {
    for event in collisions.read() {
        let Some((player, other)) = player_contact(event, &players) else {
            continue;
        };
        if hazards.contains(other) {
            debug!("Hazard {:?} hit player {:?}", other, player);
            respawns.write(RespawnRequested { entity: player });
        }
    }
}
