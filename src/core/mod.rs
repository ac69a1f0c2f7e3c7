pub mod clock;
pub mod connectivity;
pub mod task;
pub mod view;
