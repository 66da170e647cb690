//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Sensors (refill pads, checkpoints) - should not block movement
    Sensor,
    /// Hazards that send the player back to spawn
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Latest reading from the ground sensor.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Cosmetic state derived once per frame for the animation layer.
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct MovementAnimation {
    pub running: bool,
    pub jumping: bool,
    pub falling: bool,
    pub double_jumping: bool,
    pub facing: Facing,
}

/// Seconds left during which hazard contact is ignored after a respawn.
#[derive(Component, Debug, Default)]
pub struct RespawnGrace(pub f32);
