//! Terminal module: Ownership of the physical terminal.
//!
//! The renderer itself is sink-agnostic; this module provides the one
//! process-wide resource it writes into, acquired and released with RAII
//! rather than global state.

mod session;

pub use session::TerminalSession;
