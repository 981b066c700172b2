use math::MathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EulerError {
    #[error("Problem {0} not implemented")]
    UnknownProblem(u32),

    #[error(transparent)]
    Math(#[from] MathError),
}
