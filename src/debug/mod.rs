//! Debug tooling for tuning the controller in a running game.
//!
//! Hotkeys:
//! - F1: toggle the movement info overlay
//! - F5: forget the saved checkpoint and reset to the level start
//! - F6: force a respawn

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{ActiveSpawn, RespawnRequested};
use crate::level::LEVEL_START;
use crate::movement::{MovementController, MovementTuning, Player};
use crate::save::{SavePath, clear_spawn};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the movement info overlay
    pub show_info: bool,
}

/// Marker for the movement info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_debug_info_overlay).chain());
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    save_path: Res<SavePath>,
    mut spawn: ResMut<ActiveSpawn>,
    players: Query<Entity, With<Player>>,
    mut respawns: MessageWriter<RespawnRequested>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }

    let forget_save = keyboard.just_pressed(KeyCode::F5);
    if forget_save {
        match clear_spawn(&save_path.0) {
            Ok(()) => info!("[DEBUG] Saved spawn cleared"),
            Err(e) => warn!("[DEBUG] {e}"),
        }
        spawn.position = LEVEL_START;
    }

    if forget_save || keyboard.just_pressed(KeyCode::F6) {
        for entity in &players {
            respawns.write(RespawnRequested { entity });
        }
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    tuning: Res<MovementTuning>,
    player_query: Query<(&Transform, &MovementController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let state = controller.state();
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nPhase: {:?}\nCoyote: {:.2}s\nJumps: {}/{}\nAir jumps: {} (next force {:.0})\nPolicy: {:?}",
            pos.x,
            pos.y,
            state.current_velocity.x,
            state.current_velocity.y,
            controller.ground_phase(),
            controller.coyote_elapsed(),
            controller.jumps_remaining(),
            tuning.max_jumps,
            state.extra_jump_count,
            tuning.airborne_jump_force(state.extra_jump_count),
            controller.policy(),
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
