// SQLite implementation of the ActivityStore port.
//
// Documents live in one table. `id` is the internal identifier and never
// leaves this module; participants are kept as a JSON array so each update
// is a single conditional UPDATE statement.

use crate::modules::activities::adapters::outbound::activity_store::{ActivityStore, StoreError};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::participant_update::ParticipantUpdate;
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::time::Duration;

const SQL_CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL,
  participants TEXT NOT NULL DEFAULT '[]'
)
"#;

const SQL_CREATE_UNIQUE_NAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS activities_name_unique ON activities (name)";

const SQL_COUNT: &str = "SELECT COUNT(*) FROM activities";

const SQL_INSERT: &str = r#"
INSERT INTO activities (name, description, schedule, max_participants, participants)
VALUES (?, ?, ?, ?, ?)
"#;

const SQL_FIND_BY_NAME: &str = r#"
SELECT name, description, schedule, max_participants, participants
FROM activities
WHERE name = ?
ORDER BY id
LIMIT 1
"#;

const SQL_FIND_ALL: &str = r#"
SELECT name, description, schedule, max_participants, participants
FROM activities
ORDER BY id
"#;

const SQL_ADD_PARTICIPANT: &str = r#"
UPDATE activities
SET participants = json_insert(participants, '$[#]', ?1)
WHERE name = ?2
  AND NOT EXISTS (SELECT 1 FROM json_each(activities.participants) WHERE value = ?1)
"#;

const SQL_REMOVE_PARTICIPANT: &str = r#"
UPDATE activities
SET participants = (
  SELECT json_group_array(value) FROM json_each(activities.participants) WHERE value <> ?1
)
WHERE name = ?2
  AND EXISTS (SELECT 1 FROM json_each(activities.participants) WHERE value = ?1)
"#;

type ActivityRow = (String, String, String, i64, String);

pub struct SqliteActivityStore {
    pool: SqlitePool,
}

impl SqliteActivityStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect(url)
            .await
            .map_err(backend)?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(SQL_CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn row_to_activity(row: ActivityRow) -> Result<Activity, StoreError> {
    let (name, description, schedule, max_participants, participants) = row;
    let participants: Vec<String> = serde_json::from_str(&participants)
        .map_err(|e| StoreError::Backend(format!("corrupt participants for {name:?}: {e}")))?;
    let max_participants = u32::try_from(max_participants)
        .map_err(|e| StoreError::Backend(format!("corrupt capacity for {name:?}: {e}")))?;
    Ok(Activity {
        name,
        description,
        schedule,
        max_participants,
        participants,
    })
}

#[async_trait]
impl ActivityStore for SqliteActivityStore {
    async fn ensure_unique_name_index(&self) -> Result<(), StoreError> {
        sqlx::query(SQL_CREATE_UNIQUE_NAME_INDEX)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(SQL_COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;
        Ok(count as u64)
    }

    async fn insert_one(&self, activity: Activity) -> Result<(), StoreError> {
        let participants = serde_json::to_string(&activity.participants)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        sqlx::query(SQL_INSERT)
            .bind(&activity.name)
            .bind(&activity.description)
            .bind(&activity.schedule)
            .bind(i64::from(activity.max_participants))
            .bind(participants)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                let duplicate = err
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation());
                if duplicate {
                    StoreError::DuplicateKey {
                        name: activity.name.clone(),
                    }
                } else {
                    backend(err)
                }
            })?;
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        let row = sqlx::query_as::<_, ActivityRow>(SQL_FIND_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        row.map(row_to_activity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Activity>, StoreError> {
        let rows = sqlx::query_as::<_, ActivityRow>(SQL_FIND_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        rows.into_iter().map(row_to_activity).collect()
    }

    async fn update_participants(
        &self,
        name: &str,
        update: &ParticipantUpdate,
    ) -> Result<u64, StoreError> {
        let sql = match update {
            ParticipantUpdate::Add(_) => SQL_ADD_PARTICIPANT,
            ParticipantUpdate::Remove(_) => SQL_REMOVE_PARTICIPANT,
        };
        let result = sqlx::query(sql)
            .bind(update.email())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected())
    }
}
