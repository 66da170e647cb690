//! Content domain: data-driven tuning loaded before the app starts.

mod data;
mod loader;


pub use loader::{ContentError, TuningSource, load_movement_tuning};

use avian2d::prelude::Gravity;
use bevy::prelude::*;

use crate::movement::MovementTuning;

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

/// Installs already-validated tuning. Loading happens in `main` so a bad file
/// stops the program before any window opens.
pub struct ContentPlugin {
    pub tuning: MovementTuning,
    pub source: TuningSource,
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let source = self.source.clone();
        app.insert_resource(self.tuning.clone())
            .insert_resource(Gravity(Vec2::NEG_Y * self.tuning.gravity))
            .add_systems(Startup, move |tuning: Res<MovementTuning>| {
                match &source {
                    TuningSource::Defaults => {
                        info!("No movement config found, using built-in tuning")
                    }
                    TuningSource::File(path) => {
                        info!("Loaded movement tuning from {}", path.display())
                    }
                }
                info!(
                    "Movement: max_speed={}, jump_force={}, max_jumps={}, policy={:?}, underflow={:?}, chain_height={:.0}",
                    tuning.max_speed,
                    tuning.jump_force,
                    tuning.max_jumps,
                    tuning.policy,
                    tuning.underflow_policy,
                    tuning.max_chain_height()
                );
            });
    }
}
