//! Model definition to compartment graph.

use sq_graph::CompartmentGraph;

use crate::ProjectResult;
use crate::schema::ModelDef;
use crate::validate::validate_model;

/// Validate `model` and build its compartment graph.
pub fn build_graph(model: &ModelDef) -> ProjectResult<CompartmentGraph> {
    validate_model(model)?;

    let mut graph = CompartmentGraph::new();
    for c in &model.compartments {
        graph.add_compartment(c.name.as_str(), c.initial_volume_ml, c.compressible)?;
    }
    for conn in &model.connections {
        graph.connect(&conn.a, &conn.b)?;
    }
    Ok(graph)
}
