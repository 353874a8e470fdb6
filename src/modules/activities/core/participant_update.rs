/// Atomic single-document update on an activity's participant list.
///
/// Stores must apply each variant as one indivisible step and report whether
/// the document changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantUpdate {
    /// Append the email unless it is already present.
    Add(String),
    /// Remove every occurrence of the email.
    Remove(String),
}

impl ParticipantUpdate {
    pub fn email(&self) -> &str {
        match self {
            ParticipantUpdate::Add(email) | ParticipantUpdate::Remove(email) => email,
        }
    }

    /// Applies the update to an in-memory list, returning whether it changed.
    pub fn apply(&self, participants: &mut Vec<String>) -> bool {
        match self {
            ParticipantUpdate::Add(email) => {
                if participants.iter().any(|p| p == email) {
                    return false;
                }
                participants.push(email.clone());
                true
            }
            ParticipantUpdate::Remove(email) => {
                let before = participants.len();
                participants.retain(|p| p != email);
                participants.len() != before
            }
        }
    }
}

#[cfg(test)]
mod participant_update_tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_appends_at_the_end() {
        let mut participants = list(&["a@x.edu"]);
        assert!(ParticipantUpdate::Add("b@x.edu".into()).apply(&mut participants));
        assert_eq!(participants, list(&["a@x.edu", "b@x.edu"]));
    }

    #[test]
    fn add_is_a_no_op_when_already_present() {
        let mut participants = list(&["a@x.edu"]);
        assert!(!ParticipantUpdate::Add("a@x.edu".into()).apply(&mut participants));
        assert_eq!(participants, list(&["a@x.edu"]));
    }

    #[test]
    fn remove_keeps_the_order_of_the_rest() {
        let mut participants = list(&["a@x.edu", "b@x.edu", "c@x.edu"]);
        assert!(ParticipantUpdate::Remove("b@x.edu".into()).apply(&mut participants));
        assert_eq!(participants, list(&["a@x.edu", "c@x.edu"]));
    }

    #[test]
    fn remove_reports_no_change_when_absent() {
        let mut participants = list(&["a@x.edu"]);
        assert!(!ParticipantUpdate::Remove("z@x.edu".into()).apply(&mut participants));
    }
}
