//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::ActiveSpawn;
use crate::movement::{
    GameLayer, MovementController, MovementPolicy, MovementTuning, Player, RespawnGrace,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(28.0, 32.0);

/// Spawn the player at the active spawn point with a full jump budget.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    spawn: Res<ActiveSpawn>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let color = match tuning.policy {
        MovementPolicy::FreeAirControl => Color::srgb(0.35, 0.8, 0.4),
        MovementPolicy::GroundOnlyControl => Color::srgb(0.85, 0.3, 0.3),
    };

    info!(
        "Spawning player at {:?}: policy={:?}, max_jumps={}",
        spawn.position, tuning.policy, tuning.max_jumps
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementController::new(&tuning, tuning.policy),
            RespawnGrace::default(),
        ),
        // Rendering
        Sprite {
            color,
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(spawn.position),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Sensor, GameLayer::Hazard],
            ),
        ),
    ));
}
