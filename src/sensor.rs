use swarm_core::{MotionAccess, PermissionResponse};

/// Raw device-orientation reading, stamped on arrival and applied on the next
/// frame. Only the latest reading matters, so a single slot is enough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawOrientation {
    pub gamma: Option<f64>,
    pub beta: Option<f64>,
    pub at_ms: f64,
}

/// Sensor access implied by what the browser exposes.
#[inline]
pub fn access_from_capabilities(has_event: bool, has_request_permission: bool) -> MotionAccess {
    match (has_event, has_request_permission) {
        (false, _) => MotionAccess::Unavailable,
        (true, true) => MotionAccess::AwaitingPermission,
        (true, false) => MotionAccess::Open,
    }
}

/// Map the settled `requestPermission()` promise to a response.
///
/// `Ok(answer)` is the resolved value (if it was a string); `Err(())` means the
/// promise rejected.
#[inline]
pub fn classify_permission_answer(outcome: Result<Option<&str>, ()>) -> PermissionResponse {
    match outcome {
        Ok(Some(answer)) if answer == crate::constants::PERMISSION_GRANTED => {
            PermissionResponse::Granted
        }
        Ok(_) => PermissionResponse::Denied,
        Err(()) => PermissionResponse::Failed,
    }
}
