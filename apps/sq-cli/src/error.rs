use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Project(#[from] sq_project::ProjectError),

    #[error(transparent)]
    Validation(#[from] sq_project::ValidationError),

    #[error(transparent)]
    Solver(#[from] sq_solver::SolverError),

    #[error(transparent)]
    Sim(#[from] sq_sim::SimError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {what}")]
    Input { what: String },
}
