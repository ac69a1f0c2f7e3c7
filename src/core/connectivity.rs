/// Reachability of the backend, as last observed by a remote call.
///
/// `Connecting` is only ever the initial state. Once any call resolves the
/// status moves to `Online` or `Offline` and stays within those two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityStatus {
    #[default]
    Connecting,
    Online,
    Offline,
}

/// Outcome of a single remote call, stripped of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Succeeded,
    Failed,
}

impl CallOutcome {
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

impl ConnectivityStatus {
    /// Transition table. The previous state does not matter: the latest
    /// resolved call decides.
    pub fn after(self, outcome: CallOutcome) -> Self {
        match (self, outcome) {
            (_, CallOutcome::Succeeded) => Self::Online,
            (_, CallOutcome::Failed) => Self::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "Connecting",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    /// Text shown next to the backend URL.
    pub fn probe_text(&self) -> &'static str {
        match self {
            Self::Connecting => "Probing...",
            Self::Online => "Connected",
            Self::Offline => "Unreachable",
        }
    }
}
