use std::path::PathBuf;

use sq_project::{build_graph, default_model, load_yaml};

fn workspace_root() -> PathBuf {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

#[test]
fn bundled_model_matches_default() {
    let path = workspace_root().join("models/human_airspaces.yaml");
    let model = load_yaml(&path).unwrap();
    assert_eq!(model, default_model());
}

#[test]
fn bundled_model_solves_at_two_atmospheres() {
    let path = workspace_root().join("models/human_airspaces.yaml");
    let graph = build_graph(&load_yaml(&path).unwrap()).unwrap();

    let snap = sq_solver::solve(&graph, 2.0, None).unwrap();
    assert!((snap.total_volume() - 2670.5).abs() < 1e-9);
    assert_eq!(snap.volume("middle_ear"), Some(1.0));
}
