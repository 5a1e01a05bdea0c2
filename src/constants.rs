// Page wiring and drawing constants used by the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "swarm-canvas";
pub const STATUS_LABEL_ID: &str = "motion-status";
pub const INDICATOR_ROW_ID: &str = "motion-indicator";
pub const INDICATOR_LABEL_ID: &str = "indicator-label";
pub const MOTION_BUTTON_ID: &str = "enable-motion";
pub const INDICATOR_ACTIVE_CLASS: &str = "active";

// Translucent night-blue wash drawn each frame; low alpha leaves short trails.
pub const TRAIL_FILL: &str = "hsla(235, 82%, 3%, 0.10)";

// Particle `size` is a diameter
pub const RADIUS_PER_SIZE: f64 = 0.5;

// Sensor plumbing
pub const ORIENTATION_EVENT: &str = "deviceorientation";
pub const ORIENTATION_CTOR: &str = "DeviceOrientationEvent";
pub const REQUEST_PERMISSION_FN: &str = "requestPermission";
pub const PERMISSION_GRANTED: &str = "granted";
