//! UI domain: in-run HUD elements.

mod hud_jumps;

#[cfg(test)]
mod tests;

pub use hud_jumps::{IconLook, JumpBarState};

use bevy::prelude::*;

use crate::ui::hud_jumps::{spawn_jump_bar, update_jump_bar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_jump_bar)
            .add_systems(Update, update_jump_bar);
    }
}
