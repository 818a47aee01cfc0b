//! Input module: Message-passing delivery of terminal events.
//!
//! One actor thread polls crossterm for keyboard and resize events and
//! forwards them over a bounded crossbeam channel. The editing loop polls
//! that channel with a bounded wait once per iteration, so resize and
//! shutdown requests are observed between frames, never mid-mutation.

mod actor;
mod events;

pub use actor::InputActor;
pub use events::{EditorEvent, Key};
