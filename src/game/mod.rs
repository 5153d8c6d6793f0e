//! Rock-Paper-Scissors round logic
//!
//! Everything in here is platform-free: time comes in through `Clock`,
//! the opponent through `ChoiceSource`, and out goes a `RoundSnapshot`.

pub mod clock;
pub mod input;
pub mod machine;
pub mod random;
pub mod resolver;
pub mod snapshot;
pub mod state;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use input::InputEvent;
pub use machine::{GameStateMachine, DECISIVE_HOLD_MS, TIE_RESTART_MS};
pub use random::{ChoiceSource, RngChoiceSource, ScriptedChoiceSource};
pub use resolver::resolve;
pub use snapshot::RoundSnapshot;
pub use state::RoundState;
