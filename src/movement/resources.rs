//! Movement domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::movement::budget::UnderflowPolicy;

/// Horizontal control rule, picked per character at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementPolicy {
    /// Same acceleration ramp on the ground and in the air.
    #[default]
    FreeAirControl,
    /// Input only steers while grounded; airborne horizontal velocity is pinned to zero.
    GroundOnlyControl,
}

/// Tuning values for the movement controller.
///
/// Forces are impulses per unit mass, so they read as instantaneous velocity changes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub jump_force: f32,
    /// Applied to upward velocity when the jump input is released early.
    pub jump_cut_multiplier: f32,
    pub coyote_time: f32,
    /// Total jumps (ground and air) before the budget runs out.
    pub max_jumps: u32,
    /// Quadratic penalty on successive air jumps: `1 + r * n^2`.
    pub double_jump_reduction: f32,
    pub policy: MovementPolicy,
    pub underflow_policy: UnderflowPolicy,
    pub consume_coyote_on_jump: bool,
    pub gravity: f32,
    /// Hazard hits are ignored for this long after a respawn.
    pub respawn_grace: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            accel: 640.0,
            decel: 3840.0,
            jump_force: 640.0,
            jump_cut_multiplier: 0.5,
            coyote_time: 0.2,
            max_jumps: 5,
            double_jump_reduction: 0.5,
            policy: MovementPolicy::FreeAirControl,
            underflow_policy: UnderflowPolicy::Reject,
            consume_coyote_on_jump: false,
            gravity: 628.0,
            respawn_grace: 0.25,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{field} must be a finite number greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("jump_cut_multiplier must lie strictly between 0 and 1, got {0}")]
    JumpCutOutOfRange(f32),
    #[error("max_jumps must be at least 1")]
    NoJumps,
}

impl MovementTuning {
    /// Reject tuning that would make the controller misbehave at runtime.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("max_speed", self.max_speed),
            ("accel", self.accel),
            ("decel", self.decel),
            ("jump_force", self.jump_force),
            ("gravity", self.gravity),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("coyote_time", self.coyote_time),
            ("double_jump_reduction", self.double_jump_reduction),
            ("respawn_grace", self.respawn_grace),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !(self.jump_cut_multiplier > 0.0 && self.jump_cut_multiplier < 1.0) {
            return Err(TuningError::JumpCutOutOfRange(self.jump_cut_multiplier));
        }

        if self.max_jumps == 0 {
            return Err(TuningError::NoJumps);
        }

        Ok(())
    }

    /// Divisor applied to the `n`-th air jump since landing (`n` counted from zero).
    pub fn jump_force_divisor(&self, n: u32) -> f32 {
        let n = n as f32;
        1.0 + self.double_jump_reduction * n * n
    }

    pub fn airborne_jump_force(&self, extra_jump_count: u32) -> f32 {
        self.jump_force / self.jump_force_divisor(extra_jump_count)
    }

    /// Apex height of a single full-force jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Height gained by spending the whole budget: one ground jump, then
    /// every remaining jump in the air at its apex.
    pub fn max_chain_height(&self) -> f32 {
        let air_jumps = self.max_jumps.saturating_sub(1);
        (0..air_jumps).fold(self.single_jump_height(), |height, n| {
            let v = self.airborne_jump_force(n);
            height + v * v / (2.0 * self.gravity)
        })
    }
}
