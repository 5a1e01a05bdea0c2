pub mod orientation;
pub mod pointer;

pub use orientation::{detect_motion_access, wire_orientation_listener, wire_permission_button};
pub use pointer::wire_pointer_handlers;
