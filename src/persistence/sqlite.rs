use super::{PersistenceResult, SettingsStore, TimetableStore};
use crate::lesson::Lesson;
use crate::settings::Settings;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// SQLite-backed store for both the lesson collection and the settings
/// record. Rows hold the serde JSON of each value; the lesson rowid
/// preserves insertion order, which the resolver relies on for stable
/// tie-breaking.
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                settings_json TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS lessons (
                position INTEGER PRIMARY KEY AUTOINCREMENT,
                lesson_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl TimetableStore for SqliteStore {
    fn save_lessons(&self, lessons: &[Lesson]) -> PersistenceResult<()> {
        super::validate_lessons(lessons)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM lessons", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO lessons (lesson_json) VALUES (?1)")?;
            for lesson in lessons {
                let json = serde_json::to_string(lesson)?;
                stmt.execute(params![json])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_lessons(&self) -> PersistenceResult<Option<Vec<Lesson>>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM lessons", [], |row| row.get(0))?;
        if count == 0 {
            return Ok(None);
        }

        let mut stmt = conn.prepare("SELECT lesson_json FROM lessons ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut lessons = Vec::new();
        for json in rows {
            let lesson: Lesson = serde_json::from_str(&json?)?;
            lessons.push(lesson);
        }

        super::validate_lessons(&lessons)?;
        Ok(Some(lessons))
    }
}

impl SettingsStore for SqliteStore {
    fn save_settings(&self, settings: &Settings) -> PersistenceResult<()> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let json = serde_json::to_string(settings)?;
        conn.execute(
            "INSERT INTO settings (id, settings_json) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET settings_json = excluded.settings_json",
            params![json],
        )?;
        Ok(())
    }

    fn load_settings(&self) -> PersistenceResult<Option<Settings>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT settings_json FROM settings WHERE id = 1")?;
        let json: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
