//! Movement domain: controller core and the systems that bind it to the body.

mod bootstrap;
mod budget;
mod components;
mod controller;
mod coyote;
mod resources;
pub(crate) mod systems;


pub use budget::{JumpBudget, UnderflowPolicy};
pub use components::*;
pub use controller::{
    ImpulseSink, JumpClass, MovementController, MovementEvent, MovementState, TickInput,
    horizontal_step,
};
pub use coyote::{CoyoteTimer, GroundPhase, GroundTransition};
pub use resources::{MovementPolicy, MovementTuning, TuningError};

pub(crate) use bootstrap::PLAYER_SIZE;

use bevy::prelude::*;

use crate::core::{
    DoubleJumpPerformed, JumpPerformed, PlayerReset, RefillJumps, RespawnRequested,
};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_jump_refills, apply_respawn_requests, detect_ground, read_input, tick_movement,
    tick_respawn_grace, update_animation_intents,
};

/// Ordering of the fixed-step movement pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Collaborator events applied between ticks.
    External,
    Sense,
    Tick,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RefillJumps>()
            .add_message::<RespawnRequested>()
            .add_message::<JumpPerformed>()
            .add_message::<DoubleJumpPerformed>()
            .add_message::<PlayerReset>()
            .configure_sets(
                FixedUpdate,
                (MovementSet::External, MovementSet::Sense, MovementSet::Tick).chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_input, update_animation_intents))
            .add_systems(
                FixedUpdate,
                (
                    (apply_respawn_requests, apply_jump_refills)
                        .chain()
                        .in_set(MovementSet::External),
                    detect_ground.in_set(MovementSet::Sense),
                    (tick_movement, tick_respawn_grace)
                        .chain()
                        .in_set(MovementSet::Tick),
                ),
            );
    }
}
