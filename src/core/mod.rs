//! Core domain: camera, session resources and the message channel.

mod events;
mod resources;
mod systems;

pub use events::{
    CheckpointActivated, DoubleJumpPerformed, JumpPerformed, PlayerReset, RefillJumps,
    RespawnRequested,
};
pub use resources::ActiveSpawn;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveSpawn>()
            .add_message::<CheckpointActivated>()
            .add_systems(Startup, setup_camera);
    }
}
