//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod presentation;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_jump_refills, apply_respawn_requests, tick_movement, tick_respawn_grace,
};
pub(crate) use presentation::update_animation_intents;
