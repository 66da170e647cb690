//! Objects domain: collectible pads that restore the jump budget.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{PlayerReset, RefillJumps};
use crate::movement::Player;
use crate::objects::player_contact;

/// A one-shot refill. Collected pads come back when the player is reset.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct RefillPad {
    collected: bool,
}

impl Default for RefillPad {
    fn default() -> Self {
        Self::new()
    }
}

impl RefillPad {
    pub fn new() -> Self {
        Self { collected: false }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Returns `true` only for the first touch.
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }

    pub fn restore(&mut self) {
        self.collected = false;
    }
}

pub(crate) fn collect_refill_pads(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    players: Query<(), With<Player>>,
    mut pads: Query<(&mut RefillPad, &mut Visibility)>,
    mut refills: MessageWriter<RefillJumps>,
) {
    for event in collisions.read() {
        let Some((player, other)) = player_contact(event, &players) else {
            continue;
        };
        let Ok((mut pad, mut visibility)) = pads.get_mut(other) else {
            continue;
        };
        if !pad.collect() {
            continue;
        }

        debug!("Refill pad {:?} collected", other);
        refills.write(RefillJumps {
            target: Some(player),
        });
        *visibility = Visibility::Hidden;
        commands.entity(other).insert(ColliderDisabled);
    }
}

pub(crate) fn restore_refill_pads(
    mut commands: Commands,
    mut resets: MessageReader<PlayerReset>,
    mut pads: Query<(Entity, &mut RefillPad, &mut Visibility)>,
) {
    if resets.read().count() == 0 {
        return;
    }

    for (entity, mut pad, mut visibility) in &mut pads {
        if !pad.is_collected() {
            continue;
        }
        pad.restore();
        *visibility = Visibility::Inherited;
        commands.entity(entity).remove::<ColliderDisabled>();
    }
}
