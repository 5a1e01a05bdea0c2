//! Human-readable status for an external label/indicator UI.
//!
//! The core decides *what* to say; a [`StatusSink`] decides how to show it.
//! [`StatusBoard`] sits between the two and only forwards changes, so a sink
//! backed by the DOM is not touched every frame.

use crate::orientation::MotionAccess;
use crate::steering::ControlMode;

pub const MSG_LOCKED: &str = "Motion signal locked.";
pub const MSG_GUIDING: &str = "Guiding swarm with touch input.";
pub const MSG_WAITING: &str = "Waiting for motion data…";
pub const MSG_AWAITING: &str = "Awaiting motion access…";
pub const MSG_UNAVAILABLE: &str = "Motion sensors unavailable. Drag to guide.";
pub const MSG_DENIED: &str = "Motion access denied. Drag to guide.";
pub const MSG_FAILED: &str = "Motion request failed. Drag to guide.";
pub const MSG_STREAMING: &str = "Motion data streaming. Tilt to guide the swarm!";

/// Indicator row state: lit when tilt is in control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub active: bool,
    pub message: &'static str,
}

/// Display surface for status text and the control indicator.
pub trait StatusSink {
    fn set_status(&mut self, message: &str);
    fn set_indicator(&mut self, active: bool, message: &str);
}

/// Indicator for a frame's control mode.
pub fn indicator_for(mode: ControlMode, access: MotionAccess) -> Indicator {
    match mode {
        ControlMode::Orientation => Indicator {
            active: true,
            message: MSG_LOCKED,
        },
        ControlMode::Pointer => Indicator {
            active: false,
            message: MSG_GUIDING,
        },
        ControlMode::Idle => Indicator {
            active: false,
            message: idle_message(access),
        },
    }
}

fn idle_message(access: MotionAccess) -> &'static str {
    match access {
        MotionAccess::Open | MotionAccess::Granted => MSG_WAITING,
        MotionAccess::AwaitingPermission | MotionAccess::Requesting => MSG_AWAITING,
        MotionAccess::Denied => MSG_DENIED,
        MotionAccess::Failed => MSG_FAILED,
        MotionAccess::Unavailable => MSG_UNAVAILABLE,
    }
}

/// Status line for an access state, shown at setup and after a permission
/// decision.
pub fn access_status(access: MotionAccess) -> &'static str {
    match access {
        MotionAccess::Unavailable => "Drag across the canvas to guide the particle swarm.",
        MotionAccess::Open => "Tilt your device to steer the swarm. Drag to guide it on desktop.",
        MotionAccess::AwaitingPermission | MotionAccess::Requesting => {
            "Tap “Enable motion access”, then tilt your device to steer the swarm."
        }
        MotionAccess::Granted => "Tilt your device to steer the swarm.",
        MotionAccess::Denied => "Motion access denied. Drag with your finger to guide the swarm.",
        MotionAccess::Failed => "Motion request failed. Drag with your finger to guide the swarm.",
    }
}

/// De-duplicating front for a [`StatusSink`].
pub struct StatusBoard<S: StatusSink> {
    sink: S,
    status: Option<String>,
    indicator: Option<(bool, String)>,
}

impl<S: StatusSink> StatusBoard<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            status: None,
            indicator: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn set_status(&mut self, message: &str) {
        if self.status.as_deref() == Some(message) {
            return;
        }
        self.sink.set_status(message);
        self.status = Some(message.to_owned());
    }

    pub fn set_indicator(&mut self, indicator: Indicator) {
        let unchanged = matches!(
            &self.indicator,
            Some((active, msg)) if *active == indicator.active && msg == indicator.message
        );
        if unchanged {
            return;
        }
        self.sink.set_indicator(indicator.active, indicator.message);
        self.indicator = Some((indicator.active, indicator.message.to_owned()));
    }

    /// Show the status line and idle indicator for an access state.
    pub fn announce_access(&mut self, access: MotionAccess) {
        self.set_status(access_status(access));
        self.set_indicator(indicator_for(ControlMode::Idle, access));
    }

    pub fn announce_streaming(&mut self) {
        self.set_status(MSG_STREAMING);
    }
}
