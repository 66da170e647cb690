//! Movement domain: per-frame animation intents derived from the controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::DoubleJumpPerformed;
use crate::movement::{Facing, GroundContact, MovementAnimation, MovementController, Player};

pub(crate) fn update_animation_intents(
    mut double_jumps: MessageReader<DoubleJumpPerformed>,
    mut query: Query<
        (
            Entity,
            &MovementController,
            &GroundContact,
            &LinearVelocity,
            &mut MovementAnimation,
            Option<&mut Sprite>,
        ),
        With<Player>,
    >,
) {
    let double_jumpers: Vec<Entity> = double_jumps.read().map(|e| e.entity).collect();

    for (entity, controller, contact, velocity, mut animation, sprite) in &mut query {
        let double_jumping = if contact.0 {
            false
        } else {
            animation.double_jumping || double_jumpers.contains(&entity)
        };

        let vx = controller.state().current_velocity.x;
        let facing = if vx > 0.0 {
            Facing::Right
        } else if vx < 0.0 {
            Facing::Left
        } else {
            animation.facing
        };

        animation.set_if_neq(MovementAnimation {
            running: vx != 0.0 && contact.0,
            jumping: velocity.y > 0.0 && !double_jumping,
            falling: velocity.y < 0.0 && !double_jumping,
            double_jumping,
            facing,
        });

        if let Some(mut sprite) = sprite {
            let flip = facing == Facing::Left;
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
        }
    }
}
