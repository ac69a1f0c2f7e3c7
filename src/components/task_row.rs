use garden_tasks::core::task::ViewTask;

const COL_TASK: usize = 40;

/// One line per task: row number, completion mark, text, backend id, priority.
pub fn task_row(index: usize, task: &ViewTask) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let text = if task.completed {
        strike(&task.task)
    } else {
        task.task.clone()
    };
    format!(
        "{:>3}. {} {:<width$} #{:<5} {}",
        index + 1,
        check,
        text,
        task.backend_id,
        task.priority.label(),
        width = COL_TASK
    )
}

/// Combining long stroke overlay on every character.
fn strike(s: &str) -> String {
    s.chars().flat_map(|c| [c, '\u{0336}']).collect()
}
