use std::fmt::Display;

use colouring_solver::GraphError;
use thiserror::Error;

use crate::parsers::dimacs::DimacsParseError;

pub(crate) type ColouringResult<T> = Result<T, ColouringError>;

#[derive(Error, Debug)]
pub(crate) enum ColouringError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} is not supported.")]
    InvalidInstanceFile(String),
    #[error("The dimacs file was invalid, more details: {0}")]
    InvalidDimacs(#[from] DimacsParseError),
    #[error("The graph was invalid, more details: {0}")]
    InvalidGraph(#[from] GraphError),
}

impl ColouringError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}
