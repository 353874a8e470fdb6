use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::participant_update::ParticipantUpdate;

pub fn decide_unregister(activity: &Activity, email: &str) -> Decision {
    if !activity.has_participant(email) {
        return Decision::Rejected {
            reason: DecideError::NotAParticipant,
        };
    }
    Decision::Accepted {
        update: ParticipantUpdate::Remove(email.to_string()),
    }
}
