use garden_tasks::core::connectivity::ConnectivityStatus;

/// Connectivity badge, e.g. `● Online`.
pub fn status_badge(status: ConnectivityStatus) -> String {
    let dot = match status {
        ConnectivityStatus::Connecting => '…',
        ConnectivityStatus::Online => '●',
        ConnectivityStatus::Offline => '○',
    };
    format!("{} {}", dot, status.label())
}

/// The backend bar: configured URL plus what we currently know about it.
pub fn backend_bar(api_url: &str, status: ConnectivityStatus) -> String {
    format!("Backend  {}  ({})", api_url, status.probe_text())
}
