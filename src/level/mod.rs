//! Level domain: the demo stage with ground, pads, a checkpoint and a saw.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::ActiveSpawn;
use crate::movement::{GameLayer, Ground, MovementTuning, PLAYER_SIZE};
use crate::objects::{Checkpoint, Hazard, Patrol, RefillPad};

const GROUND_TOP: f32 = -200.0;
const GROUND_THICKNESS: f32 = 40.0;
const PAD_SIZE: Vec2 = Vec2::new(36.0, 10.0);
const SAW_SIZE: f32 = 32.0;

/// Where a fresh game starts when no checkpoint has been saved.
pub const LEVEL_START: Vec3 = Vec3::new(-520.0, GROUND_TOP + PLAYER_SIZE.y * 0.5 + 1.0, 0.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ActiveSpawn::new(LEVEL_START))
            .add_systems(Startup, spawn_level);
    }
}

fn spawn_ground(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) {
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Default]);

    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        ground_layers,
    ));
}

fn spawn_refill_pad(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        RefillPad::new(),
        Sprite {
            color: Color::srgb(0.3, 0.75, 0.35),
            custom_size: Some(PAD_SIZE),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        Visibility::Inherited,
        Sensor,
        Collider::rectangle(PAD_SIZE.x, PAD_SIZE.y),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_level(mut commands: Commands, tuning: Res<MovementTuning>) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ground_y = GROUND_TOP - GROUND_THICKNESS * 0.5;

    // Keep ledges comfortably inside a single jump.
    let step = tuning.single_jump_height() * 0.6;

    // Left bank, pit, right bank
    spawn_ground(
        &mut commands,
        Vec2::new(-400.0, ground_y),
        Vec2::new(400.0, GROUND_THICKNESS),
        ground_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(420.0, ground_y),
        Vec2::new(560.0, GROUND_THICKNESS),
        ground_color,
    );

    // Ledges climbing over the pit
    spawn_ground(
        &mut commands,
        Vec2::new(-120.0, GROUND_TOP + step),
        Vec2::new(120.0, 20.0),
        platform_color,
    );
    spawn_ground(
        &mut commands,
        Vec2::new(260.0, GROUND_TOP + step * 2.0),
        Vec2::new(120.0, 20.0),
        platform_color,
    );

    // Refill pads hanging over the pit
    spawn_refill_pad(&mut commands, Vec2::new(0.0, GROUND_TOP + step * 1.5));
    spawn_refill_pad(&mut commands, Vec2::new(120.0, GROUND_TOP + step * 2.5));

    // Checkpoint on the right bank
    commands.spawn((
        Checkpoint::default(),
        Sprite {
            color: Color::srgb(0.6, 0.6, 0.7),
            custom_size: Some(Vec2::new(16.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(220.0, GROUND_TOP + 24.0, 1.0),
        Sensor,
        Collider::rectangle(16.0, 48.0),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    // Saw patrolling the far end of the right bank
    let saw_start = Vec2::new(420.0, GROUND_TOP + SAW_SIZE * 0.5);
    commands.spawn((
        Hazard,
        Patrol::new(saw_start, Vec2::new(660.0, saw_start.y), 120.0),
        Sprite {
            color: Color::srgb(0.75, 0.75, 0.8),
            custom_size: Some(Vec2::splat(SAW_SIZE)),
            ..default()
        },
        Transform::from_xyz(saw_start.x, saw_start.y, 1.0),
        RigidBody::Kinematic,
        Sensor,
        Collider::circle(SAW_SIZE * 0.5),
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    // Falling into the pit counts as a hit
    commands.spawn((
        Hazard,
        Transform::from_xyz(0.0, GROUND_TOP - 400.0, 0.0),
        Sensor,
        Collider::rectangle(2000.0, 40.0),
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    info!("Level spawned: ledge step={:.0}", step);
}
