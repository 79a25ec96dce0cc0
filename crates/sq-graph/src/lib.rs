//! sq-graph: gas compartment graph and volume snapshots.
//!
//! Provides:
//! - `CompartmentGraph`: named compartments with a baseline volume, a
//!   compressibility flag, and symmetric connectivity for display
//! - `Snapshot`: immutable name -> volume mapping tagged with its ambient pressure
//!
//! # Example
//!
//! ```
//! use sq_graph::CompartmentGraph;
//!
//! let mut graph = CompartmentGraph::new();
//! graph.add_compartment("lungs", 5000.0, true).unwrap();
//! graph.add_compartment("sinuses", 90.0, false).unwrap();
//! graph.connect("lungs", "sinuses").unwrap();
//!
//! let snapshot = graph.initial_snapshot();
//! assert_eq!(snapshot.pressure(), 1.0);
//! assert_eq!(snapshot.total_volume(), 5090.0);
//! ```

pub mod error;
pub mod graph;
pub mod snapshot;

pub use error::{GraphError, GraphResult};
pub use graph::{Compartment, CompartmentGraph};
pub use snapshot::Snapshot;
