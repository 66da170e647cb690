//! Objects domain: level collaborators that feed events into the movement controller.

mod checkpoint;
mod refill_pad;
mod saw;


pub use checkpoint::Checkpoint;
pub use refill_pad::RefillPad;
pub use saw::{Hazard, Patrol};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::Player;
use crate::objects::checkpoint::activate_checkpoints;
use crate::objects::refill_pad::{collect_refill_pads, restore_refill_pads};
use crate::objects::saw::{hazard_contact, move_saws};

/// Split a collision into (player, other) when one side is the player.
fn player_contact(
    event: &CollisionStart,
    players: &Query<(), With<Player>>,
) -> Option<(Entity, Entity)> {
    if players.contains(event.collider1) {
        Some((event.collider1, event.collider2))
    } else if players.contains(event.collider2) {
        Some((event.collider2, event.collider1))
    } else {
        None
    }
}

pub struct ObjectsPlugin;

impl Plugin for ObjectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (collect_refill_pads, activate_checkpoints, hazard_contact),
                restore_refill_pads,
                move_saws,
            ),
        );
    }
}
