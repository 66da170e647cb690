//! Movement domain: jump budget accounting.

use serde::{Deserialize, Serialize};

/// How a jump request with an empty budget is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnderflowPolicy {
    /// Empty budget rejects the jump outright.
    #[default]
    Reject,
    /// The jump always spends one unit; a negative budget forces a respawn on the next tick.
    RespawnOnUnderflow,
}

/// Remaining jumps before the character is out of budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpBudget {
    remaining: i32,
    max: i32,
}

impl JumpBudget {
    pub fn new(max: u32) -> Self {
        let max = i32::try_from(max).unwrap_or(i32::MAX);
        Self {
            remaining: max,
            max,
        }
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// A negative balance only exists under [`UnderflowPolicy::RespawnOnUnderflow`].
    pub fn is_underflowed(&self) -> bool {
        self.remaining < 0
    }

    /// Spend one jump. Returns `false` when the policy rejects the request.
    pub fn try_spend(&mut self, policy: UnderflowPolicy) -> bool {
        match policy {
            UnderflowPolicy::Reject if self.is_exhausted() => false,
            UnderflowPolicy::Reject => {
                self.remaining -= 1;
                true
            }
            UnderflowPolicy::RespawnOnUnderflow => {
                self.remaining = self.remaining.saturating_sub(1);
                true
            }
        }
    }

    /// Top the budget back up. Calling it repeatedly has the same effect as once.
    pub fn refill(&mut self) {
        self.remaining = self.max;
    }
}
