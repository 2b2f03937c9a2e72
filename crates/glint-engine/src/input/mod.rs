//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s.
//!
//! `InputState` answers "is this key held / where is the cursor" queries;
//! `InputFrame` carries per-frame transitions and the accumulated scroll
//! delta, and is cleared after each presented frame.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, PointerMoveEvent, WheelDelta};
