//! Application layer: input thread, controller, and frame rendering.
//!
//! The architecture is a small actor model:
//! - An input thread polls the terminal and forwards [`InputEvent`]s over a
//!   crossbeam channel
//! - The main loop selects over input and editor change notifications,
//!   updates [`App`] state, and redraws the screen
//!
//! Everything except the event loop itself is headless: [`App`]'s action
//! methods run without a terminal, which is how they are tested.

mod controller;
mod input;
mod messages;
mod view;

pub use controller::{App, AppConfig, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
