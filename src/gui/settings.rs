use serde::{
    Deserialize,
    Serialize,
};

use crate::flashcards::{
    JlptFilter,
    StudyMode,
};

/// Persisted app state, saved to `settings.json` in the app data dir.
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub backend_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub last_book_id: Option<String>,
    #[serde(default)]
    pub study_mode: StudyMode,
    #[serde(default)]
    pub jlpt_filter: JlptFilter,
}
