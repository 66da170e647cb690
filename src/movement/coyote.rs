//! Movement domain: ground-phase state machine with the coyote window.

/// Where the character stands relative to the ground, as seen by the jump logic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GroundPhase {
    #[default]
    Grounded,
    /// Contact was lost `elapsed` seconds ago and the grace window is still open.
    Coyote { elapsed: f32 },
    /// Airborne with no grace window left.
    Expired,
}

/// What changed in the ground phase during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    None,
    Landed,
    LeftGround,
    CoyoteExpired,
}

/// Elapsed-time accumulator for the coyote window.
///
/// Only one countdown is ever live: losing contact always restarts it from zero
/// and regaining contact cancels it outright.
#[derive(Debug, Clone, Default)]
pub struct CoyoteTimer {
    phase: GroundPhase,
    /// Set when a jump closed the window while still grounded, so the next
    /// loss of contact skips straight to `Expired`.
    window_consumed: bool,
}

impl CoyoteTimer {
    pub fn phase(&self) -> GroundPhase {
        self.phase
    }

    pub fn is_grounded(&self) -> bool {
        self.phase == GroundPhase::Grounded
    }

    pub fn coyote_active(&self) -> bool {
        matches!(self.phase, GroundPhase::Coyote { .. })
    }

    /// Seconds since contact was lost, zero outside the coyote window.
    pub fn coyote_elapsed(&self) -> f32 {
        match self.phase {
            GroundPhase::Coyote { elapsed } => elapsed,
            _ => 0.0,
        }
    }

    /// Grounded-class jumps are allowed on the ground and inside the window.
    pub fn allows_grounded_jump(&self) -> bool {
        !matches!(self.phase, GroundPhase::Expired)
    }

    /// Advance the state machine by one tick.
    ///
    /// Elapsed time is only accumulated on ticks that start inside the window,
    /// so the tick that loses contact opens it at zero.
    pub fn update(&mut self, grounded: bool, dt: f32, coyote_time: f32) -> GroundTransition {
        if grounded {
            let was_grounded = self.is_grounded();
            self.phase = GroundPhase::Grounded;
            if was_grounded {
                return GroundTransition::None;
            }
            self.window_consumed = false;
            return GroundTransition::Landed;
        }

        match self.phase {
            GroundPhase::Grounded => {
                self.phase = if self.window_consumed || coyote_time <= 0.0 {
                    GroundPhase::Expired
                } else {
                    GroundPhase::Coyote { elapsed: 0.0 }
                };
                self.window_consumed = false;
                GroundTransition::LeftGround
            }
            GroundPhase::Coyote { elapsed } => {
                let elapsed = elapsed + dt.max(0.0);
                if elapsed >= coyote_time {
                    self.phase = GroundPhase::Expired;
                    GroundTransition::CoyoteExpired
                } else {
                    self.phase = GroundPhase::Coyote { elapsed };
                    GroundTransition::None
                }
            }
            GroundPhase::Expired => GroundTransition::None,
        }
    }

    /// Close the grace window after a jump.
    pub fn consume(&mut self) {
        match self.phase {
            GroundPhase::Grounded => self.window_consumed = true,
            GroundPhase::Coyote { .. } => self.phase = GroundPhase::Expired,
            GroundPhase::Expired => {}
        }
    }

    /// Drop back to a fresh grounded state, e.g. after a respawn.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
