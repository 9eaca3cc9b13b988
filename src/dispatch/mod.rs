//! Event dispatch - the queue, its producers and the scheduler draining it.

pub mod handle;
pub mod keybindings;
pub mod queue;
pub mod scheduler;

pub use handle::UiHandle;
pub use keybindings::{Action, KeyBinding, KeybindingRegistry};
pub use queue::{EventQueue, EventSender};
pub use scheduler::{State, Ui};
