use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::participant_update::ParticipantUpdate;

pub fn decide_sign_up(activity: &Activity, email: &str) -> Decision {
    if activity.has_participant(email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    Decision::Accepted {
        update: ParticipantUpdate::Add(email.to_string()),
    }
}
