use std::fmt::Write;

use garden_tasks::application::TaskBoard;
use garden_tasks::core::view::{Filter, task_count};

use crate::components::progress_bar::progress_bar;
use crate::components::status_badge::{backend_bar, status_badge};
use crate::components::task_row::task_row;

/// Render the whole task page as text.
pub fn list_view(board: &TaskBoard, api_url: &str, clock: &str) -> String {
    let mut out = String::new();
    let status = board.status();

    // Header
    let _ = writeln!(out, "Garden Tasks    {}  {}", status_badge(status), clock);
    let _ = writeln!(out, "{}", backend_bar(api_url, status));
    let _ = writeln!(out);

    // Stats
    let stats = board.stats();
    let _ = writeln!(
        out,
        "Total {}   Active {}   Done {}",
        stats.total, stats.active, stats.completed
    );
    let _ = writeln!(out, "{}", progress_bar(stats.progress()));
    let _ = writeln!(out);

    // Filter tabs
    let visible = board.visible();
    let tabs: Vec<String> = Filter::ALL
        .iter()
        .map(|f| {
            if *f == board.filter() {
                format!("[{}]", f.label())
            } else {
                f.label().to_string()
            }
        })
        .collect();
    let _ = writeln!(
        out,
        "{}    {}    new: {}",
        tabs.join(" "),
        task_count(visible.len()),
        board.priority().label()
    );

    // List
    if board.is_loading() {
        let _ = writeln!(out, "  Loading...");
    } else if board.show_unreachable() {
        let _ = writeln!(out, "  Backend unreachable");
        let _ = writeln!(out, "  {}", api_url);
    } else if visible.is_empty() {
        let _ = writeln!(out, "  {}", board.filter().empty_text());
    } else {
        for (idx, task) in visible.iter().enumerate() {
            let _ = writeln!(out, "{}", task_row(idx, task));
        }
    }

    // Footer
    if !board.is_loading() && stats.total > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {} remaining", task_count(stats.active));
    }

    out
}
