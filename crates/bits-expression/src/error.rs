use thiserror::Error;

/// Errors produced while evaluating a packet tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A comparison operator was applied to the wrong number of sub-packets.
    #[error("\"{operator}\" operator expects {expected} sub-packets, found {found}")]
    ArityError {
        operator: &'static str,
        expected: usize,
        found: usize,
    },

    /// A min/max operator was applied to zero sub-packets.
    #[error("\"{0}\" operator applied to zero sub-packets")]
    EmptyOperands(&'static str),

    /// Evaluation exceeded the 64-bit unsigned range.
    #[error("arithmetic overflow while evaluating \"{0}\"")]
    Overflow(&'static str),
}
