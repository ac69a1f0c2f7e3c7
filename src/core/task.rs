use serde::{Deserialize, Serialize};

/// A task record as the backend stores it.
///
/// The backend owns both fields; the client only ever reads them and issues
/// create/delete requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTask {
    pub id: i64,
    pub task: String,
}

impl RemoteTask {
    pub fn new(id: i64, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
        }
    }

    /// Key under which this task's local metadata is stored.
    pub fn meta_key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Accepts either the keyword (`CRITICAL`) or the display label (`Urgent`).
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" | "URGENT" => Some(Self::Critical),
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Client-only presentation state for a remote task. Never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalMeta {
    pub completed: bool,
    pub priority: Priority,
}

impl LocalMeta {
    pub fn with_priority(priority: Priority) -> Self {
        Self {
            completed: false,
            priority,
        }
    }
}

/// Read-only join of a [`RemoteTask`] and its [`LocalMeta`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTask {
    pub id: String,
    pub backend_id: i64,
    pub task: String,
    pub completed: bool,
    pub priority: Priority,
}

impl ViewTask {
    pub fn join(remote: &RemoteTask, meta: LocalMeta) -> Self {
        Self {
            id: remote.meta_key(),
            backend_id: remote.id,
            task: remote.task.clone(),
            completed: meta.completed,
            priority: meta.priority,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
