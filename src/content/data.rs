//! Content domain: on-disk shapes of data files.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

pub const MOVEMENT_SCHEMA_VERSION: u32 = 1;

/// `movement.ron`: tuning for the player controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementConfigFile {
    pub schema_version: u32,
    pub tuning: MovementTuning,
}
