//! Dive session state for squeeze.
//!
//! A `DiveSession` owns the compartment graph together with the snapshot at
//! the current ambient pressure. Hosts (CLI, UI, animation loops) hold one
//! session and drive it by pressure or seawater depth.

pub mod error;
pub mod session;

pub use error::{SimError, SimResult};
pub use session::DiveSession;
