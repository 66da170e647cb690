//! Core domain: shared resources for the play session.

use bevy::prelude::*;

/// Where the player is sent on spawn and respawn. Updated by checkpoints.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ActiveSpawn {
    pub position: Vec3,
}

impl ActiveSpawn {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}
