//! Queue Error Types
//!
//! Every error here is user-facing and recoverable. Validation errors send
//! the requester back to the name prompt; membership errors abort the request.

use crate::core::error_handling::ContextualError;
use crate::queue::types::LaneId;

/// A submitted name that cannot be used as an identity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is {length} characters long (max: {max})")]
    TooLong { length: usize, max: usize },

    #[error("Name contains unrecognised character {ch:?}")]
    InvalidChar { ch: char },

    #[error("Name is empty")]
    Empty,
}

impl ValidationError {
    /// Alert title shown to the requester
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::TooLong { .. } => "Shorten Your Name",
            ValidationError::InvalidChar { .. } => "Non-recognisable Characters",
            ValidationError::Empty => "Not a Valid Name",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::TooLong { .. } => "TooLong",
            ValidationError::InvalidChar { .. } => "InvalidChar",
            ValidationError::Empty => "Empty",
        }
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(match self {
            ValidationError::TooLong { .. } => {
                "Sorry, your input name must not contain more than 17 characters."
            }
            ValidationError::InvalidChar { .. } => {
                "Sorry, your input contains at least one unrecognised character."
            }
            ValidationError::Empty => "Please enter a valid name in the given field.",
        })
    }
}

/// A valid name that is already waiting somewhere
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MembershipError {
    #[error("{name} is already waiting in the {lane} lane")]
    AlreadyQueued { name: String, lane: LaneId },

    #[error("{name} is already waiting in the {other} lane")]
    AlreadyInOtherLane { name: String, other: LaneId },
}

impl MembershipError {
    pub fn title(&self) -> &'static str {
        match self {
            MembershipError::AlreadyQueued { .. } => "Already Queued",
            MembershipError::AlreadyInOtherLane { .. } => "Already in Another queue",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MembershipError::AlreadyQueued { .. } => "AlreadyQueued",
            MembershipError::AlreadyInOtherLane { .. } => "AlreadyInOtherLane",
        }
    }
}

impl ContextualError for MembershipError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(match self {
            MembershipError::AlreadyQueued { .. } => {
                "Sorry the request is rejected as you are already in the queue."
            }
            MembershipError::AlreadyInOtherLane { other, .. } => match other {
                LaneId::Quick => {
                    "Sorry the request is rejected as you have already requested help in the quick question queue"
                }
                LaneId::Long => {
                    "Sorry the request is rejected as you have already requested help in the long question queue"
                }
            },
        })
    }
}

/// Any reason an enqueue request was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnqueueError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Membership(#[from] MembershipError),
}

impl EnqueueError {
    /// Whether the requester should be asked for a name again
    pub fn should_reprompt(&self) -> bool {
        matches!(self, EnqueueError::Validation(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            EnqueueError::Validation(e) => e.title(),
            EnqueueError::Membership(e) => e.title(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EnqueueError::Validation(e) => e.kind(),
            EnqueueError::Membership(e) => e.kind(),
        }
    }
}

impl ContextualError for EnqueueError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            EnqueueError::Validation(e) => e.user_message(),
            EnqueueError::Membership(e) => e.user_message(),
        }
    }
}

/// Result type for enqueue operations
pub type EnqueueResult<T> = Result<T, EnqueueError>;
