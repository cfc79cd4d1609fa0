use std::path::{Path, PathBuf};

/// Participant and session metadata that drives the report chrome.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionContext {
    pub student_name: String,
    pub teacher_name: String,
    /// 1-based index of this session.
    pub session_number: u32,
    pub total_sessions: u32,
    /// `YYYY-MM-DD`; today is used when absent or unparseable.
    pub date: Option<String>,
    pub photo_path: Option<PathBuf>,
    pub logo_path: Option<PathBuf>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            student_name: String::new(),
            teacher_name: String::new(),
            session_number: 1,
            total_sessions: 8,
            date: None,
            photo_path: None,
            logo_path: None,
        }
    }
}

impl SessionContext {
    /// Session photo path, only when it names an existing file.
    pub fn existing_photo(&self) -> Option<&Path> {
        existing(self.photo_path.as_deref())
    }

    /// Logo path, only when it names an existing file.
    pub fn existing_logo(&self) -> Option<&Path> {
        existing(self.logo_path.as_deref())
    }
}

fn existing(path: Option<&Path>) -> Option<&Path> {
    let path = path?;
    if path.is_file() {
        Some(path)
    } else {
        tracing::warn!(path = %path.display(), "image path does not exist, block omitted");
        None
    }
}
