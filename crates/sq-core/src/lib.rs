//! sq-core: shared foundation for squeeze.
//!
//! Contains:
//! - units (uom SI types, atm/ml constructors, seawater depth conversion)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact IDs for compartments)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{SqError, SqResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
