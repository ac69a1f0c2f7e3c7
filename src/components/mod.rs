pub mod progress_bar;
pub mod status_badge;
pub mod task_row;
