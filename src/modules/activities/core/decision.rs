use crate::modules::activities::core::participant_update::ParticipantUpdate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Already signed up")]
    AlreadySignedUp,

    #[error("Participant not found in this activity")]
    NotAParticipant,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { update: ParticipantUpdate },
    Rejected { reason: DecideError },
}
