use crate::core::task::{Priority, RemoteTask};
use crate::core::view::Filter;
use crate::sync::NetworkError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Input form
    InputChanged(String),
    SetPriority(Priority),
    Submit,

    // Filter tabs
    SetFilter(Filter),

    // Task actions, keyed by backend id
    Toggle(i64),
    Delete(i64),

    // Remote call resolutions
    Loaded(Result<Vec<RemoteTask>, NetworkError>),
    /// Carries the form priority captured when the create was issued.
    Created(Result<RemoteTask, NetworkError>, Priority),
    Deleted(Result<(), NetworkError>),
}

/// Remote work requested by `update`. Performed by the runtime, whose result
/// comes back as a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Load,
    Create { description: String, priority: Priority },
    Delete(i64),
}

impl Command {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
