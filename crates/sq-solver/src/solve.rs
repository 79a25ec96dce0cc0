//! High-level solver interface.

use sq_core::{Real, Tolerances, ensure_finite, nearly_equal};
use sq_graph::{CompartmentGraph, Snapshot};
use tracing::{debug, trace};

use crate::error::{SolverError, SolverResult};

/// Options for a solve.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveOptions {
    /// Tolerance used when a graph without compressible compartments is
    /// checked for a volume change it cannot absorb.
    pub tolerances: Tolerances,
}

/// Compute every compartment's volume at `target_pressure` (atm).
///
/// `reference` defaults to `graph.initial_snapshot()`. See
/// [`solve_with_options`] for the algorithm and failure conditions.
pub fn solve(
    graph: &CompartmentGraph,
    target_pressure: Real,
    reference: Option<&Snapshot>,
) -> SolverResult<Snapshot> {
    solve_with_options(graph, target_pressure, reference, &SolveOptions::default())
}

/// Compute every compartment's volume at `target_pressure` (atm).
///
/// This function:
/// 1. Compresses the reference total volume by `reference.pressure / target_pressure`
/// 2. Keeps each rigid compartment at its reference volume
/// 3. Splits what is left among compressible compartments, weighted by their
///    baseline volumes in `graph` (not by their reference volumes)
///
/// Because the weights come from the graph, chaining solves gives the same
/// result as solving directly from the first reference.
///
/// # Errors
/// * `InvalidPressure` if `target_pressure` is not positive and finite
/// * `UnknownCompartment` / `IncompleteSnapshot` if the reference and graph
///   name different compartments
/// * `NoCompressibleCapacity` if the volume changes but nothing can compress
/// * `CompressibleCollapse` if rigid compartments alone fill the new total
pub fn solve_with_options(
    graph: &CompartmentGraph,
    target_pressure: Real,
    reference: Option<&Snapshot>,
    options: &SolveOptions,
) -> SolverResult<Snapshot> {
    if !target_pressure.is_finite() || target_pressure <= 0.0 {
        return Err(SolverError::InvalidPressure {
            pressure: target_pressure,
        });
    }

    let initial;
    let reference = match reference {
        Some(snapshot) => snapshot,
        None => {
            initial = graph.initial_snapshot();
            &initial
        }
    };
    check_coverage(graph, reference)?;

    let total_volume = reference.total_volume();
    let compression_ratio = target_pressure / reference.pressure();
    let new_total = ensure_finite(total_volume / compression_ratio, "compressed total volume")?;

    debug!(
        target_pressure,
        reference_pressure = reference.pressure(),
        total_volume,
        new_total,
        "redistributing compartment volumes"
    );

    let mut volumes: Vec<(String, Real)> = Vec::with_capacity(graph.len());
    let mut rigid_total = 0.0;
    for compartment in graph.compartments().iter().filter(|c| !c.compressible) {
        let volume = reference_volume(reference, &compartment.name)?;
        rigid_total += volume;
        volumes.push((compartment.name.clone(), volume));
    }

    let remaining = new_total - rigid_total;
    let capacity = graph.compressible_capacity();

    if graph.compressible_count() == 0 || capacity <= 0.0 {
        if nearly_equal(new_total, rigid_total, options.tolerances) {
            return Ok(Snapshot::new(volumes, target_pressure)?);
        }
        return Err(SolverError::NoCompressibleCapacity {
            unabsorbed: remaining,
        });
    }

    if remaining <= 0.0 {
        return Err(SolverError::CompressibleCollapse {
            rigid_total,
            new_total,
        });
    }

    for compartment in graph.compartments().iter().filter(|c| c.compressible) {
        let volume = ensure_finite(
            remaining * compartment.initial_volume / capacity,
            "compressible volume",
        )?;
        trace!(compartment = %compartment.name, volume, "compressed");
        volumes.push((compartment.name.clone(), volume));
    }

    Ok(Snapshot::new(volumes, target_pressure)?)
}

/// The reference must name exactly the graph's compartments.
fn check_coverage(graph: &CompartmentGraph, reference: &Snapshot) -> SolverResult<()> {
    if let Some(name) = reference.names().find(|name| graph.id_of(name).is_none()) {
        return Err(SolverError::UnknownCompartment {
            name: name.to_string(),
        });
    }
    if let Some(c) = graph
        .compartments()
        .iter()
        .find(|c| !reference.contains(&c.name))
    {
        return Err(SolverError::IncompleteSnapshot {
            name: c.name.clone(),
        });
    }
    Ok(())
}

fn reference_volume(reference: &Snapshot, name: &str) -> SolverResult<Real> {
    reference
        .volume(name)
        .ok_or_else(|| SolverError::IncompleteSnapshot {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airways() -> CompartmentGraph {
        let mut graph = CompartmentGraph::new();
        graph.add_compartment("lungs", 5000.0, true).unwrap();
        graph.add_compartment("nasopharynx", 250.0, true).unwrap();
        graph.add_compartment("sinuses", 90.0, false).unwrap();
        graph.add_compartment("middle_ear", 1.0, false).unwrap();
        graph
    }

    fn close(a: Real, b: Real) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn two_atmospheres_halves_total() {
        let graph = airways();
        let snap = solve(&graph, 2.0, None).unwrap();

        assert_eq!(snap.pressure(), 2.0);
        assert!(close(snap.total_volume(), 2670.5));
        assert_eq!(snap.volume("sinuses"), Some(90.0));
        assert_eq!(snap.volume("middle_ear"), Some(1.0));
        assert!(close(snap.volume("lungs").unwrap(), 2579.5 * 5000.0 / 5250.0));
        assert!(close(snap.volume("nasopharynx").unwrap(), 2579.5 * 250.0 / 5250.0));
    }

    #[test]
    fn non_positive_pressure_rejected() {
        let graph = airways();
        for p in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = solve(&graph, p, None).unwrap_err();
            assert!(matches!(err, SolverError::InvalidPressure { .. }));
        }
    }

    #[test]
    fn rigid_only_graph() {
        let mut graph = CompartmentGraph::new();
        graph.add_compartment("sinuses", 90.0, false).unwrap();
        graph.add_compartment("middle_ear", 1.0, false).unwrap();

        // Nothing to absorb at the reference pressure
        let same = solve(&graph, 1.0, None).unwrap();
        assert_eq!(same.total_volume(), 91.0);

        let err = solve(&graph, 3.0, None).unwrap_err();
        match err {
            SolverError::NoCompressibleCapacity { unabsorbed } => {
                assert!(close(unabsorbed, 91.0 / 3.0 - 91.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rigid_volume_exceeding_compressed_total() {
        let mut graph = CompartmentGraph::new();
        graph.add_compartment("lungs", 10.0, true).unwrap();
        graph.add_compartment("sinuses", 90.0, false).unwrap();

        // 100 ml at 1 atm is 50 ml at 2 atm, less than the rigid 90 ml
        let err = solve(&graph, 2.0, None).unwrap_err();
        assert!(matches!(err, SolverError::CompressibleCollapse { .. }));
    }

    #[test]
    fn reference_must_match_graph() {
        let graph = airways();

        let extra = Snapshot::new(
            [
                ("lungs", 5000.0),
                ("nasopharynx", 250.0),
                ("sinuses", 90.0),
                ("middle_ear", 1.0),
                ("stomach", 50.0),
            ],
            1.0,
        )
        .unwrap();
        assert_eq!(
            solve(&graph, 2.0, Some(&extra)).unwrap_err(),
            SolverError::UnknownCompartment {
                name: "stomach".into()
            }
        );

        let missing = Snapshot::new([("lungs", 5000.0), ("nasopharynx", 250.0)], 1.0).unwrap();
        assert!(matches!(
            solve(&graph, 2.0, Some(&missing)),
            Err(SolverError::IncompleteSnapshot { .. })
        ));
    }

    #[test]
    fn empty_graph_solves_to_empty_snapshot() {
        let graph = CompartmentGraph::new();
        let snap = solve(&graph, 4.0, None).unwrap();
        assert!(snap.is_empty());
        assert_eq!(snap.pressure(), 4.0);
    }

    #[test]
    fn reference_is_untouched() {
        let graph = airways();
        let reference = graph.initial_snapshot();
        let before = reference.clone();
        let _ = solve(&graph, 5.0, Some(&reference)).unwrap();
        assert_eq!(reference, before);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn build_graph(compressible: &[Real], rigid: &[Real]) -> CompartmentGraph {
        let mut graph = CompartmentGraph::new();
        for (i, v) in compressible.iter().enumerate() {
            graph.add_compartment(format!("c{i}"), *v, true).unwrap();
        }
        for (i, v) in rigid.iter().enumerate() {
            graph.add_compartment(format!("r{i}"), *v, false).unwrap();
        }
        graph
    }

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    // Rigid spaces are kept small so they never fill the compressed total.
    fn volumes() -> impl Strategy<Value = (Vec<Real>, Vec<Real>)> {
        (
            prop::collection::vec(1000.0_f64..10_000.0, 1..6),
            prop::collection::vec(0.1_f64..10.0, 0..4),
        )
    }

    proptest! {
        #[test]
        fn total_volume_is_conserved((comp, rigid) in volumes(), p in 0.5_f64..20.0) {
            let graph = build_graph(&comp, &rigid);
            let reference = graph.initial_snapshot();
            let snap = solve(&graph, p, Some(&reference)).unwrap();
            let expected = reference.total_volume() * reference.pressure() / p;
            prop_assert!(nearly_equal(snap.total_volume(), expected, tol()));
        }

        #[test]
        fn rigid_compartments_are_exact((comp, rigid) in volumes(), p in 0.5_f64..20.0) {
            let graph = build_graph(&comp, &rigid);
            let reference = graph.initial_snapshot();
            let snap = solve(&graph, p, Some(&reference)).unwrap();
            for c in graph.compartments().iter().filter(|c| !c.compressible) {
                prop_assert_eq!(snap.volume(&c.name), reference.volume(&c.name));
            }
        }

        #[test]
        fn compressible_ratios_follow_baselines(
            (comp, rigid) in volumes(),
            p in 0.5_f64..20.0,
        ) {
            prop_assume!(comp.len() >= 2);
            let graph = build_graph(&comp, &rigid);
            let snap = solve(&graph, p, None).unwrap();
            let a = snap.volume("c0").unwrap();
            let b = snap.volume("c1").unwrap();
            prop_assert!(nearly_equal(a / b, comp[0] / comp[1], tol()));
        }

        #[test]
        fn reference_pressure_is_identity((comp, rigid) in volumes()) {
            let graph = build_graph(&comp, &rigid);
            let reference = graph.initial_snapshot();
            let snap = solve(&graph, reference.pressure(), Some(&reference)).unwrap();
            for (name, v) in reference.iter() {
                prop_assert!(nearly_equal(snap.volume(name).unwrap(), v, tol()));
            }
        }

        #[test]
        fn chaining_matches_direct_solve(
            (comp, rigid) in volumes(),
            p1 in 0.5_f64..20.0,
            p2 in 0.5_f64..20.0,
        ) {
            let graph = build_graph(&comp, &rigid);
            let reference = graph.initial_snapshot();
            let via = solve(&graph, p1, Some(&reference)).unwrap();
            let chained = solve(&graph, p2, Some(&via)).unwrap();
            let direct = solve(&graph, p2, Some(&reference)).unwrap();
            prop_assert_eq!(chained.pressure(), direct.pressure());
            for (name, v) in direct.iter() {
                prop_assert!(nearly_equal(chained.volume(name).unwrap(), v, tol()));
            }
        }
    }
}
