//! # Request gate
//!
//! State of a trigger control wrapped around one asynchronous call:
//!
//! ```text
//! Ready --begin--> Busy --succeed--> Succeeded --restore(epoch)--> Ready
//!                   |
//!                   +----fail------> Ready
//! ```
//!
//! The control is enabled only in `Ready`, so a second trigger while a call is in
//! flight (or while the success label is showing) is a no-op. Every transition
//! bumps an epoch; the restore timer armed by `succeed` carries that epoch and is
//! ignored if anything has happened to the gate since.

/// Phase of a [`RequestGate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    #[default]
    Ready,
    Busy,
    Succeeded,
}

/// The three labels a gated control cycles through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateLabels {
    pub idle: &'static str,
    pub busy: &'static str,
    pub success: &'static str,
}

pub const LOGIN_LABELS: GateLabels = GateLabels {
    idle: "Log in",
    busy: "Logging in...",
    success: "Success!",
};

pub const FETCH_LABELS: GateLabels = GateLabels {
    idle: "Fetch Teams",
    busy: "Fetching...",
    success: "Teams loaded!",
};

pub const GENERATE_LABELS: GateLabels = GateLabels {
    idle: "Generate Token",
    busy: "Generating...",
    success: "Generated!",
};

pub const COPY_LABELS: GateLabels = GateLabels {
    idle: "Copy",
    busy: "Copying...",
    success: "Copied!",
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestGate {
    phase: GatePhase,
    epoch: u64,
}

impl RequestGate {
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_ready(&self) -> bool {
        self.phase == GatePhase::Ready
    }

    pub fn is_busy(&self) -> bool {
        self.phase == GatePhase::Busy
    }

    /// Enter `Busy`. Returns `false` (and changes nothing) unless `Ready`.
    pub fn begin(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.move_to(GatePhase::Busy);
        true
    }

    /// Enter `Succeeded`; returns the epoch the restore timer must carry.
    pub fn succeed(&mut self) -> u64 {
        self.move_to(GatePhase::Succeeded);
        self.epoch
    }

    /// Back to `Ready` immediately (failure, or an explicit reset).
    pub fn reset(&mut self) {
        self.move_to(GatePhase::Ready);
    }

    /// Leave `Succeeded` if the gate is still in the state `epoch` was issued for.
    pub fn restore(&mut self, epoch: u64) -> bool {
        if self.phase != GatePhase::Succeeded || self.epoch != epoch {
            return false;
        }
        self.move_to(GatePhase::Ready);
        true
    }

    pub fn label(&self, labels: &GateLabels) -> &'static str {
        match self.phase {
            GatePhase::Ready => labels.idle,
            GatePhase::Busy => labels.busy,
            GatePhase::Succeeded => labels.success,
        }
    }

    fn move_to(&mut self, phase: GatePhase) {
        self.phase = phase;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_cycle() {
        let mut gate = RequestGate::default();
        assert_eq!(gate.label(&FETCH_LABELS), "Fetch Teams");
        assert!(gate.begin());
        assert_eq!(gate.label(&FETCH_LABELS), "Fetching...");
        let epoch = gate.succeed();
        assert_eq!(gate.label(&FETCH_LABELS), "Teams loaded!");
        assert!(!gate.is_ready());
        assert!(gate.restore(epoch));
        assert!(gate.is_ready());
        assert_eq!(gate.label(&FETCH_LABELS), "Fetch Teams");
    }

    #[test]
    fn test_begin_is_not_reentrant() {
        let mut gate = RequestGate::default();
        assert!(gate.begin());
        let before = gate.clone();
        assert!(!gate.begin());
        assert_eq!(gate, before);
    }

    #[test]
    fn test_failure_restores_immediately() {
        let mut gate = RequestGate::default();
        gate.begin();
        gate.reset();
        assert!(gate.is_ready());
    }

    #[test]
    fn test_stale_restore_is_ignored() {
        let mut gate = RequestGate::default();
        gate.begin();
        let first = gate.succeed();
        assert!(gate.restore(first));
        gate.begin();
        let second = gate.succeed();
        assert!(!gate.restore(first));
        assert_eq!(gate.phase(), GatePhase::Succeeded);
        assert!(gate.restore(second));
    }

    #[test]
    fn test_restore_after_reset_is_ignored() {
        let mut gate = RequestGate::default();
        gate.begin();
        let epoch = gate.succeed();
        gate.reset();
        gate.begin();
        assert!(!gate.restore(epoch));
        assert!(gate.is_busy());
    }
}
