//! Core domain: session-wide messages between the controller and its collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::JumpClass;

/// Restore a jump budget to its maximum. `None` refills every player.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefillJumps {
    pub target: Option<Entity>,
}

impl Message for RefillJumps {}

/// A hazard asks for the player to be sent back to spawn.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRequested {
    pub entity: Entity,
}

impl Message for RespawnRequested {}

/// Fired for every executed jump, ground or air.
#[derive(Debug, Clone, Copy)]
pub struct JumpPerformed {
    pub entity: Entity,
    pub class: JumpClass,
    pub force: f32,
    pub jumps_remaining: i32,
}

impl Message for JumpPerformed {}

/// Fired for air jumps in addition to [`JumpPerformed`].
#[derive(Debug, Clone, Copy)]
pub struct DoubleJumpPerformed {
    pub entity: Entity,
    pub extra_jump_count: u32,
}

impl Message for DoubleJumpPerformed {}

/// The player was teleported back to spawn with a full budget.
#[derive(Debug, Clone, Copy)]
pub struct PlayerReset {
    pub entity: Entity,
    pub spawn: Vec3,
}

impl Message for PlayerReset {}

/// A checkpoint moved the active spawn point.
#[derive(Debug, Clone, Copy)]
pub struct CheckpointActivated {
    pub position: Vec3,
}

impl Message for CheckpointActivated {}
