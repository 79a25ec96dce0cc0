//! End-to-end volume redistribution for the head and chest air spaces.

use sq_graph::CompartmentGraph;
use sq_solver::{PressureSweep, SolverError, solve};

fn head_and_chest() -> CompartmentGraph {
    let mut graph = CompartmentGraph::new();
    graph.add_compartment("lungs", 5000.0, true).unwrap();
    graph.add_compartment("nasopharynx", 250.0, true).unwrap();
    graph.add_compartment("sinuses", 90.0, false).unwrap();
    graph.add_compartment("middle_ear", 1.0, false).unwrap();
    graph.connect("lungs", "nasopharynx").unwrap();
    graph.connect("nasopharynx", "sinuses").unwrap();
    graph.connect("nasopharynx", "middle_ear").unwrap();
    graph
}

#[test]
fn ten_meters_of_seawater() {
    let graph = head_and_chest();
    let reference = graph.initial_snapshot();
    assert_eq!(reference.total_volume(), 5341.0);

    let snap = solve(&graph, 2.0, Some(&reference)).unwrap();

    assert!((snap.total_volume() - 2670.5).abs() < 1e-9);
    assert_eq!(snap.volume("sinuses"), Some(90.0));
    assert_eq!(snap.volume("middle_ear"), Some(1.0));

    // 2579.5 ml left for the compressible spaces, split 5000:250
    let lungs = snap.volume("lungs").unwrap();
    let naso = snap.volume("nasopharynx").unwrap();
    assert!((lungs - 2456.67).abs() < 0.01, "lungs = {lungs}");
    assert!((naso - 122.83).abs() < 0.01, "nasopharynx = {naso}");
    assert!((lungs / naso - 20.0).abs() < 1e-9);
}

#[test]
fn deeper_means_smaller_lungs() {
    let graph = head_and_chest();
    let mut last = f64::INFINITY;
    for p in [1.0, 2.0, 3.0, 20.0] {
        let lungs = solve(&graph, p, None).unwrap().volume("lungs").unwrap();
        assert!(lungs < last);
        last = lungs;
    }
}

#[test]
fn ascent_from_depth_checkpoint() {
    let graph = head_and_chest();
    let at_depth = solve(&graph, 4.0, None).unwrap();
    let surfaced = solve(&graph, 1.0, Some(&at_depth)).unwrap();
    let baseline = graph.initial_snapshot();

    for (name, v) in baseline.iter() {
        assert!((surfaced.volume(name).unwrap() - v).abs() < 1e-9, "{name}");
    }
}

#[test]
fn negative_pressure_is_rejected() {
    let graph = head_and_chest();
    let reference = graph.initial_snapshot();
    assert_eq!(
        solve(&graph, -1.0, Some(&reference)).unwrap_err(),
        SolverError::InvalidPressure { pressure: -1.0 }
    );
}

#[test]
fn rigid_only_airspace_cannot_compress() {
    let mut graph = CompartmentGraph::new();
    graph.add_compartment("sinuses", 90.0, false).unwrap();
    graph.add_compartment("middle_ear", 1.0, false).unwrap();

    let err = solve(&graph, 2.0, None).unwrap_err();
    assert!(matches!(err, SolverError::NoCompressibleCapacity { .. }));
    assert!(err.to_string().starts_with("No compressible capacity"));
}

#[test]
fn sweep_over_recreational_range() {
    let graph = head_and_chest();
    let sweep = PressureSweep::linear(1.0, 5.0, 5).unwrap();
    let snaps = sweep.run(&graph, None).unwrap();

    let totals: Vec<f64> = snaps.iter().map(|s| s.total_volume()).collect();
    for (total, p) in totals.iter().zip([1.0, 2.0, 3.0, 4.0, 5.0]) {
        assert!((total - 5341.0 / p).abs() < 1e-9);
    }
}
