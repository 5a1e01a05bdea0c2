//! Device tilt tracking.
//!
//! The tracker keeps the latest normalized tilt and when it arrived, plus the
//! sensor access state. Only [`OrientationTracker::handle_orientation_event`]
//! writes the sample; the input resolver reads it through
//! [`OrientationTracker::active_tilt`], which applies the staleness window.

use crate::constants::{ORIENTATION_STALE_MS, TILT_RANGE_DEG};
use glam::Vec2;

/// Latest tilt reading. Each axis is in `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSample {
    pub tilt: Vec2,
    pub captured_at_ms: f64,
}

impl OrientationSample {
    #[inline]
    pub fn is_live(&self, now_ms: f64) -> bool {
        now_ms - self.captured_at_ms < ORIENTATION_STALE_MS
    }
}

/// Sensor access state for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAccess {
    /// The platform has no orientation sensor.
    Unavailable,
    /// Sensor present with no permission gate.
    Open,
    /// Sensor gated; the user has not been asked yet.
    AwaitingPermission,
    /// Permission prompt is in flight.
    Requesting,
    Granted,
    Denied,
    Failed,
}

impl MotionAccess {
    #[inline]
    pub fn permission_granted(self) -> bool {
        matches!(self, MotionAccess::Open | MotionAccess::Granted)
    }

    #[inline]
    pub fn needs_permission(self) -> bool {
        matches!(
            self,
            MotionAccess::AwaitingPermission
                | MotionAccess::Requesting
                | MotionAccess::Granted
                | MotionAccess::Denied
                | MotionAccess::Failed
        )
    }

    /// True while the user still has a permission decision to make.
    #[inline]
    pub fn decision_pending(self) -> bool {
        matches!(
            self,
            MotionAccess::AwaitingPermission | MotionAccess::Requesting
        )
    }
}

/// Outcome of a platform permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionResponse {
    Granted,
    Denied,
    Failed,
}

/// Clamp a tilt angle in degrees to the steering range and scale to `[-1, 1]`.
#[inline]
pub fn normalize_tilt(degrees: f64) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    (degrees.clamp(-TILT_RANGE_DEG, TILT_RANGE_DEG) / TILT_RANGE_DEG) as f32
}

#[derive(Clone, Debug)]
pub struct OrientationTracker {
    access: MotionAccess,
    sample: Option<OrientationSample>,
    streaming_announced: bool,
}

impl OrientationTracker {
    pub fn new(access: MotionAccess) -> Self {
        Self {
            access,
            sample: None,
            streaming_announced: false,
        }
    }

    /// Tracker for a platform without any orientation sensor.
    pub fn unavailable() -> Self {
        Self::new(MotionAccess::Unavailable)
    }

    #[inline]
    pub fn access(&self) -> MotionAccess {
        self.access
    }

    #[inline]
    pub fn permission_granted(&self) -> bool {
        self.access.permission_granted()
    }

    #[inline]
    pub fn needs_permission(&self) -> bool {
        self.access.needs_permission()
    }

    #[inline]
    pub fn sample(&self) -> Option<OrientationSample> {
        self.sample
    }

    /// Mark a permission request as started.
    ///
    /// Returns true only on the first call while awaiting permission; the
    /// caller should issue the platform prompt exactly when this is true.
    pub fn begin_request(&mut self) -> bool {
        if self.access != MotionAccess::AwaitingPermission {
            log::debug!("[motion] request ignored in state {:?}", self.access);
            return false;
        }
        self.access = MotionAccess::Requesting;
        true
    }

    /// Apply the result of a permission request started with
    /// [`begin_request`](Self::begin_request).
    pub fn resolve_request(&mut self, response: PermissionResponse) {
        if self.access != MotionAccess::Requesting {
            log::debug!(
                "[motion] stray permission response {:?} in state {:?}",
                response,
                self.access
            );
            return;
        }
        self.access = match response {
            PermissionResponse::Granted => {
                self.streaming_announced = false;
                MotionAccess::Granted
            }
            PermissionResponse::Denied => MotionAccess::Denied,
            PermissionResponse::Failed => MotionAccess::Failed,
        };
        log::info!("[motion] permission resolved: {:?}", self.access);
    }

    /// Record a device-orientation event.
    ///
    /// `gamma` is left-right tilt and `beta` front-back tilt, in degrees; a
    /// missing axis reads as level. Returns whether the event was accepted.
    pub fn handle_orientation_event(
        &mut self,
        gamma: Option<f64>,
        beta: Option<f64>,
        now_ms: f64,
    ) -> bool {
        if !self.access.permission_granted() {
            return false;
        }
        let tilt = Vec2::new(
            normalize_tilt(gamma.unwrap_or(0.0)),
            normalize_tilt(beta.unwrap_or(0.0)),
        );
        self.sample = Some(OrientationSample {
            tilt,
            captured_at_ms: now_ms,
        });
        true
    }

    /// Returns true once after the first accepted sample following setup or a
    /// permission grant.
    pub fn take_streaming_notice(&mut self) -> bool {
        if self.streaming_announced || self.sample.is_none() || !self.permission_granted() {
            return false;
        }
        self.streaming_announced = true;
        true
    }

    /// The current tilt if permission is granted and the sample is still live.
    pub fn active_tilt(&self, now_ms: f64) -> Option<Vec2> {
        if !self.access.permission_granted() {
            return None;
        }
        self.sample
            .filter(|s| s.is_live(now_ms))
            .map(|s| s.tilt)
    }
}

impl Default for OrientationTracker {
    fn default() -> Self {
        Self::unavailable()
    }
}
