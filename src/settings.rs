use crate::persistence::{PersistenceResult, SettingsStore};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Receiver, Sender, channel};

/// Current settings schema. Older records are upgraded on load by letting
/// serde fill missing fields with defaults and bumping the version on save.
pub const SETTINGS_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

/// Versioned user configuration record. The resolution core only reads
/// `role`, `subgroup`, `teacher_name`, and `frequency_matches_week_number`;
/// the remaining fields are UI preferences carried for the consuming app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    /// Parity pin: `None` = auto, otherwise records whether the calendar
    /// parity agreed with the user's choice when the pin was set. See
    /// [`crate::parity::apply_override`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_matches_week_number: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_theme_color: Option<String>,
    #[serde(default)]
    pub lesson_notifications: bool,
    #[serde(default)]
    pub lesson_notes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            role: Role::Student,
            group_id: None,
            subgroup: None,
            teacher_name: None,
            frequency_matches_week_number: None,
            light_theme_color: None,
            dark_theme_color: None,
            lesson_notifications: false,
            lesson_notes: false,
        }
    }
}

impl Settings {
    /// Switches role and drops the fields that belong to the other role, so
    /// a stale subgroup can never filter a teacher's schedule or vice versa.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        match role {
            Role::Student => self.teacher_name = None,
            Role::Teacher => {
                self.subgroup = None;
                self.group_id = None;
            }
        }
        self
    }
}

/// Sole writer over a [`SettingsStore`]. Mutations go through [`update`];
/// every successful write hands a fresh snapshot to all subscribers.
///
/// [`update`]: SettingsManager::update
pub struct SettingsManager {
    store: Box<dyn SettingsStore>,
    current: Settings,
    observers: Vec<Sender<Settings>>,
}

impl SettingsManager {
    /// Loads the persisted record, upgrading it to the current schema. A
    /// missing record starts from defaults.
    pub fn open(store: Box<dyn SettingsStore>) -> PersistenceResult<Self> {
        let mut current = store.load_settings()?.unwrap_or_default();
        if current.schema_version < SETTINGS_SCHEMA_VERSION {
            debug!(
                "upgrading settings record from schema {} to {}",
                current.schema_version, SETTINGS_SCHEMA_VERSION
            );
            current.schema_version = SETTINGS_SCHEMA_VERSION;
            store.save_settings(&current)?;
        }
        Ok(Self {
            store,
            current,
            observers: Vec::new(),
        })
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Read-only change notifications. Each subscriber receives a snapshot
    /// per successful update; a dropped receiver is pruned on the next send.
    pub fn subscribe(&mut self) -> Receiver<Settings> {
        let (tx, rx) = channel();
        self.observers.push(tx);
        rx
    }

    /// Applies `mutate` to a copy of the current record, persists it, then
    /// publishes the new snapshot. The in-memory record is untouched when
    /// the store rejects the write.
    pub fn update<F>(&mut self, mutate: F) -> PersistenceResult<Settings>
    where
        F: FnOnce(Settings) -> Settings,
    {
        let mut next = mutate(self.current.clone());
        next.schema_version = SETTINGS_SCHEMA_VERSION;
        self.store.save_settings(&next)?;
        self.current = next.clone();
        self.observers.retain(|observer| {
            let delivered = observer.send(next.clone()).is_ok();
            if !delivered {
                warn!("dropping disconnected settings observer");
            }
            delivered
        });
        Ok(next)
    }
}
