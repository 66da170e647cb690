//! Movement domain: the per-character movement and jump controller.
//!
//! The controller decides what velocity the body should have each fixed tick;
//! the physics engine resolves the rest. It never touches ECS data directly,
//! everything goes through [`ImpulseSink`] and the returned [`MovementEvent`]s.

use bevy::prelude::*;

use crate::movement::budget::JumpBudget;
use crate::movement::coyote::{CoyoteTimer, GroundPhase, GroundTransition};
use crate::movement::{GroundContact, MovementAnimation, MovementPolicy, MovementTuning};

/// Receives the velocity decisions of a tick.
pub trait ImpulseSink {
    fn set_horizontal_velocity(&mut self, vx: f32);
    fn set_vertical_velocity(&mut self, vy: f32);
    /// Impulse per unit mass, added on top of the current vertical velocity.
    fn apply_vertical_impulse(&mut self, impulse: f32);
    fn teleport(&mut self, position: Vec3);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpClass {
    /// On the ground or inside the coyote window: full force.
    Grounded,
    /// Past the coyote window: scaled force, counts toward the air-jump penalty.
    Airborne,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MovementEvent {
    Jumped {
        class: JumpClass,
        force: f32,
        jumps_remaining: i32,
    },
    DoubleJumped {
        extra_jump_count: u32,
    },
    Reset {
        spawn: Vec3,
    },
}

/// Per-tick readings from the outside world.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub dt: f32,
    pub grounded: bool,
    /// Vertical velocity of the body after the last physics step.
    pub vertical_velocity: f32,
    pub spawn_point: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementState {
    pub horizontal_input: f32,
    pub current_velocity: Vec2,
    pub grounded: bool,
    pub extra_jump_count: u32,
    pub jump_requested: bool,
    pub jump_held: bool,
    release_pending: bool,
}

#[derive(Component, Debug, Clone)]
#[require(GroundContact, MovementAnimation)]
pub struct MovementController {
    state: MovementState,
    coyote: CoyoteTimer,
    budget: JumpBudget,
    policy: MovementPolicy,
}

impl MovementController {
    pub fn new(tuning: &MovementTuning, policy: MovementPolicy) -> Self {
        Self {
            state: MovementState::default(),
            coyote: CoyoteTimer::default(),
            budget: JumpBudget::new(tuning.max_jumps),
            policy,
        }
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn policy(&self) -> MovementPolicy {
        self.policy
    }

    pub fn ground_phase(&self) -> GroundPhase {
        self.coyote.phase()
    }

    pub fn coyote_active(&self) -> bool {
        self.coyote.coyote_active()
    }

    pub fn coyote_elapsed(&self) -> f32 {
        self.coyote.coyote_elapsed()
    }

    pub fn jumps_remaining(&self) -> i32 {
        self.budget.remaining()
    }

    // --- intents --------------------------------------------------------

    /// Latest directional intent; clamped to [-1, 1], garbage reads as no input.
    pub fn move_intent(&mut self, axis: f32) {
        self.state.horizontal_input = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn jump_pressed(&mut self) {
        self.state.jump_requested = true;
        self.state.jump_held = true;
    }

    /// Only a release that follows a press arms the jump cut.
    pub fn jump_released(&mut self) {
        if self.state.jump_held {
            self.state.jump_held = false;
            self.state.release_pending = true;
        }
    }

    // --- external events ------------------------------------------------

    pub fn refill_jumps(&mut self) {
        self.budget.refill();
        debug!("Jumps refilled: {}", self.budget.remaining());
    }

    /// Send the character back to `spawn` with a full budget and no momentum.
    pub fn respawn(&mut self, spawn: Vec3, sink: &mut impl ImpulseSink) -> MovementEvent {
        sink.teleport(spawn);
        sink.set_horizontal_velocity(0.0);
        sink.set_vertical_velocity(0.0);

        self.budget.refill();
        self.coyote.reset();
        self.state.current_velocity = Vec2::ZERO;
        self.state.extra_jump_count = 0;

        info!(
            "Player reset to spawn {:?}, jumps_remaining={}",
            spawn,
            self.budget.remaining()
        );
        MovementEvent::Reset { spawn }
    }

    // --- tick -----------------------------------------------------------

    /// Advance one fixed simulation step.
    pub fn tick(
        &mut self,
        tuning: &MovementTuning,
        input: TickInput,
        sink: &mut impl ImpulseSink,
    ) -> Vec<MovementEvent> {
        let mut events = Vec::new();
        let dt = if input.dt.is_finite() {
            input.dt.max(0.0)
        } else {
            0.0
        };

        // Budget went negative on the previous tick.
        if self.budget.is_underflowed() {
            events.push(self.respawn(input.spawn_point, sink));
            // Intents latched before the teleport are stale.
            self.state.jump_requested = false;
            self.state.jump_held = false;
            self.state.release_pending = false;
        } else {
            self.state.current_velocity.y = input.vertical_velocity;
        }

        self.update_ground(tuning, input.grounded, dt);

        let vx = horizontal_step(
            self.state.current_velocity.x,
            self.state.horizontal_input,
            self.state.grounded,
            self.policy,
            tuning,
            dt,
        );
        self.state.current_velocity.x = vx;
        sink.set_horizontal_velocity(vx);

        if std::mem::take(&mut self.state.jump_requested) {
            self.execute_jump(tuning, sink, &mut events);
        }

        if std::mem::take(&mut self.state.release_pending) {
            self.cut_jump(tuning, sink);
        }

        events
    }

    fn update_ground(&mut self, tuning: &MovementTuning, grounded: bool, dt: f32) {
        self.state.grounded = grounded;

        match self.coyote.update(grounded, dt, tuning.coyote_time) {
            GroundTransition::Landed => debug!(
                "Landed: extra_jump_count={} cleared, jumps_remaining={}",
                self.state.extra_jump_count,
                self.budget.remaining()
            ),
            GroundTransition::LeftGround => debug!(
                "Left ground: phase={:?}, jumps_remaining={}",
                self.coyote.phase(),
                self.budget.remaining()
            ),
            GroundTransition::CoyoteExpired => debug!("Coyote window expired"),
            GroundTransition::None => {}
        }

        if grounded {
            self.state.extra_jump_count = 0;
        }
    }

    fn execute_jump(
        &mut self,
        tuning: &MovementTuning,
        sink: &mut impl ImpulseSink,
        events: &mut Vec<MovementEvent>,
    ) {
        if !self.budget.try_spend(tuning.underflow_policy) {
            // A rejected press never arms the cut.
            self.state.jump_held = false;
            self.state.release_pending = false;
            debug!("Jump rejected: no jumps remaining");
            return;
        }

        let class = if self.coyote.allows_grounded_jump() {
            JumpClass::Grounded
        } else {
            JumpClass::Airborne
        };
        let force = match class {
            JumpClass::Grounded => tuning.jump_force,
            JumpClass::Airborne => tuning.airborne_jump_force(self.state.extra_jump_count),
        };

        // Residual rise or fall speed never stacks with the new impulse.
        sink.set_vertical_velocity(0.0);
        sink.apply_vertical_impulse(force);
        self.state.current_velocity.y = force;

        if class == JumpClass::Airborne {
            self.state.extra_jump_count += 1;
            events.push(MovementEvent::DoubleJumped {
                extra_jump_count: self.state.extra_jump_count,
            });
        }

        if tuning.consume_coyote_on_jump {
            self.coyote.consume();
        }

        debug!(
            "{:?} jump: force={:.1}, jumps_remaining={}, extra_jump_count={}",
            class,
            force,
            self.budget.remaining(),
            self.state.extra_jump_count
        );
        events.push(MovementEvent::Jumped {
            class,
            force,
            jumps_remaining: self.budget.remaining(),
        });
    }

    fn cut_jump(&mut self, tuning: &MovementTuning, sink: &mut impl ImpulseSink) {
        if self.state.current_velocity.y <= 0.0 {
            return;
        }
        self.state.current_velocity.y *= tuning.jump_cut_multiplier;
        sink.set_vertical_velocity(self.state.current_velocity.y);
    }
}

/// One tick of the horizontal ramp. Never overshoots the target velocity.
pub fn horizontal_step(
    current: f32,
    input: f32,
    grounded: bool,
    policy: MovementPolicy,
    tuning: &MovementTuning,
    dt: f32,
) -> f32 {
    if policy == MovementPolicy::GroundOnlyControl && !grounded {
        return 0.0;
    }

    let target = input * tuning.max_speed;
    let rate = if input != 0.0 {
        tuning.accel
    } else {
        tuning.decel
    };
    move_towards(current, target, rate * dt)
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
