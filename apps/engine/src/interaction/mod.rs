// Shared drag/resize/keyboard-nudge behavior for overlay elements.
// All gesture math happens in canonical space via layout::transform.

pub mod controller;
pub mod handlers;

pub use controller::{ElementController, GestureState, NudgeDirection};
