//! Error types shared by the set engine.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// One of the three behaviours a set can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BehaviourKind {
    #[display("match")]
    Match,
    #[display("print")]
    Print,
    #[display("destroy")]
    Destroy,
}

/// An operation was invoked on a set that lacks the behaviour it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingBehaviour {
    pub operation: &'static str,
    pub behaviour: BehaviourKind,
}

impl Display for MissingBehaviour {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` requires an associated `{}` behaviour, but the set has none!",
            self.operation, self.behaviour
        )
    }
}

impl Error for MissingBehaviour {}

/// An operation was invoked through the handle API with an absent set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullSet {
    pub operation: &'static str,
}

impl Display for NullSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` was provided an absent set!", self.operation)
    }
}

impl Error for NullSet {}

/// A printer reported an error while rendering a set, or the rendering couldn't be written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintFailure {
    pub operation: &'static str,
}

impl Display for PrintFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` failed to write out the set!", self.operation)
    }
}

impl Error for PrintFailure {}

/// Storage for a new node could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum AllocFailure {
    #[display("Memory allocation failure: {_0}")]
    Reserve(TryReserveError),
    #[display("Node limit of {limit} reached!")]
    LimitReached { limit: usize },
    #[display("Capacity overflow!")]
    CapacityOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum SetError {
    MissingBehaviour(MissingBehaviour),
    AllocFailure(AllocFailure),
    NullSet(NullSet),
    PrintFailure(PrintFailure),
}

impl SetError {
    pub(crate) const fn missing(operation: &'static str, behaviour: BehaviourKind) -> SetError {
        SetError::MissingBehaviour(MissingBehaviour { operation, behaviour })
    }
}
