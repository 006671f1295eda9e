use thiserror::Error;

use crate::parse::ParseError;
use crate::ImportError;

/// Unified error type covering parsing, import checks, and I/O.
///
/// Returned by [`RuleSetEngine::from_dsl()`](crate::RuleSetEngine::from_dsl)
/// and [`RuleSetEngine::from_file()`](crate::RuleSetEngine::from_file).
#[derive(Debug, Error)]
pub enum EligoError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
