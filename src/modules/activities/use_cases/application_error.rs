use crate::modules::activities::adapters::outbound::activity_store::StoreError;
use crate::modules::activities::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error(transparent)]
    Domain(#[from] DecideError),

    /// The store accepted the update but changed nothing, usually because a
    /// concurrent request got there first.
    #[error("{0}")]
    NotApplied(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}
