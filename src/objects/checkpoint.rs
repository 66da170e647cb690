//! Objects domain: checkpoints that move the spawn point.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{ActiveSpawn, CheckpointActivated, RefillJumps};
use crate::movement::Player;
use crate::objects::player_contact;

/// Triggers once, on the first touch.
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    activated: bool,
}

impl Checkpoint {
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn activate(&mut self) {
        self.activated = true;
    }
}

pub(crate) fn activate_checkpoints(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    players: Query<(), With<Player>>,
    mut checkpoints: Query<(&mut Checkpoint, &Transform, &mut Sprite)>,
    mut spawn: ResMut<ActiveSpawn>,
    mut activated: MessageWriter<CheckpointActivated>,
    mut refills: MessageWriter<RefillJumps>,
) {
    for event in collisions.read() {
        let Some((player, other)) = player_contact(event, &players) else {
            continue;
        };
        let Ok((mut checkpoint, transform, mut sprite)) = checkpoints.get_mut(other) else {
            continue;
        };
        if checkpoint.is_activated() {
            continue;
        }
        checkpoint.activate();

        spawn.position = transform.translation;
        info!("Checkpoint activated, spawn moved to {:?}", spawn.position);

        activated.write(CheckpointActivated {
            position: spawn.position,
        });
        refills.write(RefillJumps {
            target: Some(player),
        });
        sprite.color = Color::srgb(0.95, 0.8, 0.3);
        commands.entity(other).insert(ColliderDisabled);
    }
}
