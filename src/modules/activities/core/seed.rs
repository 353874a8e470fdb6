use crate::modules::activities::core::activity::Activity;

struct SeedRecord {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_RECORDS: [SeedRecord; 9] = [
    SeedRecord {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedRecord {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedRecord {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedRecord {
        name: "Basketball Club",
        description: "Play basketball and compete in local tournaments",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedRecord {
        name: "Soccer Club",
        description: "Practice soccer skills and play friendly matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedRecord {
        name: "Painting Club",
        description: "Explore different painting techniques and create artwork",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &[],
    },
    SeedRecord {
        name: "Drama Club",
        description: "Participate in theatrical productions and improve acting skills",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &[],
    },
    SeedRecord {
        name: "Debate Club",
        description: "Engage in debates and improve public speaking skills",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedRecord {
        name: "Science Club",
        description: "Conduct science experiments and learn about scientific concepts",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &[],
    },
];

/// The fixed set of activities inserted into an empty store at startup.
pub fn initial_activities() -> Vec<Activity> {
    SEED_RECORDS
        .iter()
        .map(|r| Activity {
            name: r.name.to_string(),
            description: r.description.to_string(),
            schedule: r.schedule.to_string(),
            max_participants: r.max_participants,
            participants: r.participants.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
