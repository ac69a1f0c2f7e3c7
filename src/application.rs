use std::collections::HashMap;

use crate::core::connectivity::{CallOutcome, ConnectivityStatus};
use crate::core::task::{LocalMeta, Priority, RemoteTask, ViewTask};
use crate::core::view::{self, Filter, Stats};
use crate::message::{Command, Message};

/// View model for the task list.
///
/// Owns two independently-lived collections: the backend's records and the
/// client-only metadata side table keyed by stringified backend id. Everything
/// shown on screen is derived from those two on each read.
///
/// Mutations are optimistic, but not uniformly so:
/// - delete removes the task and its metadata before the call is issued and
///   never restores them, whatever the call returns;
/// - create only adds the task once the backend has returned it, so a failed
///   create leaves nothing behind (the input box is still cleared up front).
///
/// Remote failures never surface as errors here. They only move the
/// connectivity status to `Offline`.
#[derive(Debug, Clone)]
pub struct TaskBoard {
    remote: Vec<RemoteTask>,
    meta: HashMap<String, LocalMeta>,
    status: ConnectivityStatus,
    loading: bool,

    // Input form
    input: String,
    priority: Priority,

    filter: Filter,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self {
            remote: Vec::new(),
            meta: HashMap::new(),
            status: ConnectivityStatus::Connecting,
            loading: true,
            input: String::new(),
            priority: Priority::default(),
            filter: Filter::default(),
        }
    }
}

impl TaskBoard {
    /// Fresh board plus the initial load of the remote list.
    pub fn init(priority: Priority) -> (Self, Command) {
        let board = Self {
            priority,
            ..Self::default()
        };
        (board, Command::Load)
    }

    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }

            Message::SetPriority(priority) => {
                self.priority = priority;
            }

            Message::SetFilter(filter) => {
                self.filter = filter;
            }

            Message::Submit => {
                let description = self.input.trim().to_string();
                if description.is_empty() {
                    return Command::None;
                }
                self.input.clear();
                log::debug!("Creating task {:?} at {}", description, self.priority.as_keyword());
                return Command::Create {
                    description,
                    priority: self.priority,
                };
            }

            Message::Toggle(id) => {
                let meta = self.meta.entry(id.to_string()).or_default();
                meta.completed = !meta.completed;
                log::debug!("Task {} completed={}", id, meta.completed);
            }

            Message::Delete(id) => {
                // Removal is final: the Deleted result only moves connectivity.
                self.remote.retain(|t| t.id != id);
                self.meta.remove(&id.to_string());
                log::debug!("Deleting task {}", id);
                return Command::Delete(id);
            }

            Message::Loaded(result) => {
                self.record(CallOutcome::of(&result));
                self.loading = false;
                match result {
                    Ok(tasks) => {
                        log::info!("Loaded {} tasks from backend", tasks.len());
                        self.remote = tasks;
                        self.seed_missing_meta();
                    }
                    Err(e) => {
                        log::warn!("Failed to load tasks: {}", e);
                    }
                }
            }

            Message::Created(result, priority) => {
                self.record(CallOutcome::of(&result));
                match result {
                    Ok(task) => {
                        log::info!("Created task {}", task.id);
                        self.meta
                            .insert(task.meta_key(), LocalMeta::with_priority(priority));
                        self.remote.insert(0, task);
                    }
                    Err(e) => {
                        log::warn!("Failed to create task: {}", e);
                    }
                }
            }

            Message::Deleted(result) => {
                self.record(CallOutcome::of(&result));
                if let Err(e) = result {
                    log::warn!("Failed to delete task on backend: {}", e);
                }
            }
        }

        Command::None
    }

    fn record(&mut self, outcome: CallOutcome) {
        let next = self.status.after(outcome);
        if next != self.status {
            log::info!("Backend status {} -> {}", self.status.label(), next.label());
        }
        self.status = next;
    }

    fn seed_missing_meta(&mut self) {
        for task in &self.remote {
            self.meta.entry(task.meta_key()).or_default();
        }
    }

    pub fn status(&self) -> ConnectivityStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn meta(&self, id: i64) -> Option<&LocalMeta> {
        self.meta.get(&id.to_string())
    }

    /// Every task, in display order.
    pub fn tasks(&self) -> Vec<ViewTask> {
        view::merge(&self.remote, &self.meta)
    }

    /// Tasks passing the selected filter.
    pub fn visible(&self) -> Vec<ViewTask> {
        self.view(self.filter)
    }

    pub fn view(&self, filter: Filter) -> Vec<ViewTask> {
        view::filtered(&self.tasks(), filter)
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks())
    }

    pub fn progress(&self) -> u8 {
        self.stats().progress()
    }

    /// Offline with nothing to show.
    pub fn show_unreachable(&self) -> bool {
        self.remote.is_empty() && self.status == ConnectivityStatus::Offline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::NetworkError;

    fn refused() -> NetworkError {
        NetworkError::Transport("connection refused".to_string())
    }

    fn loaded(tasks: Vec<RemoteTask>) -> TaskBoard {
        let (mut board, _) = TaskBoard::init(Priority::Medium);
        board.update(Message::Loaded(Ok(tasks)));
        board
    }

    #[test]
    fn initial_state_is_connecting_and_loading() {
        let (board, cmd) = TaskBoard::init(Priority::Medium);
        assert_eq!(cmd, Command::Load);
        assert_eq!(board.status(), ConnectivityStatus::Connecting);
        assert!(board.is_loading());
        assert!(board.tasks().is_empty());
        assert!(!board.show_unreachable());
    }

    #[test]
    fn load_seeds_default_meta() {
        let board = loaded(vec![RemoteTask::new(1, "water plants")]);

        assert_eq!(board.status(), ConnectivityStatus::Online);
        assert!(!board.is_loading());
        assert_eq!(board.meta(1), Some(&LocalMeta::default()));
        assert_eq!(
            board.tasks(),
            vec![ViewTask {
                id: "1".to_string(),
                backend_id: 1,
                task: "water plants".to_string(),
                completed: false,
                priority: Priority::Medium,
            }]
        );
    }

    #[test]
    fn load_keeps_backend_order() {
        let board = loaded(vec![
            RemoteTask::new(5, "mulch"),
            RemoteTask::new(2, "rake"),
            RemoteTask::new(9, "sow"),
        ]);
        let ids: Vec<i64> = board.tasks().iter().map(|t| t.backend_id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn load_failure_goes_offline_and_shows_banner() {
        let (mut board, _) = TaskBoard::init(Priority::Medium);
        board.update(Message::Loaded(Err(refused())));

        assert_eq!(board.status(), ConnectivityStatus::Offline);
        assert!(!board.is_loading());
        assert!(board.show_unreachable());
    }

    #[test]
    fn toggle_parity_and_no_remote_call() {
        let mut board = loaded(vec![RemoteTask::new(1, "water plants")]);
        for n in 1..=7 {
            let cmd = board.update(Message::Toggle(1));
            assert!(cmd.is_none());
            assert_eq!(board.tasks()[0].completed, n % 2 == 1);
            assert_eq!(board.status(), ConnectivityStatus::Online);
        }
    }

    #[test]
    fn toggle_does_not_touch_connectivity_while_connecting() {
        let (mut board, _) = TaskBoard::init(Priority::Medium);
        board.update(Message::Toggle(4));
        assert_eq!(board.status(), ConnectivityStatus::Connecting);
        assert_eq!(board.meta(4).map(|m| m.completed), Some(true));
    }

    #[test]
    fn blank_input_is_rejected_locally() {
        let mut board = loaded(vec![]);
        board.update(Message::InputChanged("   \t".to_string()));
        assert_eq!(board.update(Message::Submit), Command::None);
        assert_eq!(board.input(), "   \t");
    }

    #[test]
    fn submit_clears_input_and_captures_priority() {
        let mut board = loaded(vec![RemoteTask::new(1, "water plants")]);
        board.update(Message::InputChanged("  buy seeds ".to_string()));
        board.update(Message::SetPriority(Priority::High));

        let cmd = board.update(Message::Submit);
        assert_eq!(
            cmd,
            Command::Create {
                description: "buy seeds".to_string(),
                priority: Priority::High,
            }
        );
        assert_eq!(board.input(), "");
        // Nothing is added until the backend answers.
        assert_eq!(board.tasks().len(), 1);
    }

    #[test]
    fn created_task_is_prepended_with_call_time_priority() {
        let mut board = loaded(vec![RemoteTask::new(1, "water plants")]);
        board.update(Message::InputChanged("buy seeds".to_string()));
        board.update(Message::SetPriority(Priority::Critical));
        let Command::Create { priority, .. } = board.update(Message::Submit) else {
            panic!("expected a create command");
        };
        // Form priority changes while the call is in flight.
        board.update(Message::SetPriority(Priority::Low));

        board.update(Message::Created(Ok(RemoteTask::new(2, "buy seeds")), priority));

        let all = board.view(Filter::All);
        assert_eq!(all[0].backend_id, 2);
        assert_eq!(all[0].priority, Priority::Critical);
        assert!(!all[0].completed);
        assert_eq!(board.status(), ConnectivityStatus::Online);
    }

    #[test]
    fn failed_create_adds_nothing_and_goes_offline() {
        let mut board = loaded(vec![RemoteTask::new(1, "water plants")]);
        board.update(Message::InputChanged("buy seeds".to_string()));
        let cmd = board.update(Message::Submit);
        assert!(!cmd.is_none());
        assert_eq!(board.input(), "");

        board.update(Message::Created(Err(refused()), Priority::Medium));

        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.status(), ConnectivityStatus::Offline);
        assert_eq!(board.input(), "");
    }

    #[test]
    fn delete_is_immediate_and_survives_failure() {
        let mut board = loaded(vec![RemoteTask::new(1, "water plants"), RemoteTask::new(2, "weed")]);
        board.update(Message::Toggle(2));

        let cmd = board.update(Message::Delete(2));
        assert_eq!(cmd, Command::Delete(2));
        for filter in Filter::ALL {
            assert!(board.view(filter).iter().all(|t| t.backend_id != 2));
        }
        assert_eq!(board.meta(2), None);

        board.update(Message::Deleted(Err(refused())));
        assert_eq!(board.status(), ConnectivityStatus::Offline);
        for filter in Filter::ALL {
            assert!(board.view(filter).iter().all(|t| t.backend_id != 2));
        }
        assert_eq!(board.tasks().len(), 1);
    }

    #[test]
    fn delete_success_marks_online() {
        let (mut board, _) = TaskBoard::init(Priority::Medium);
        board.update(Message::Loaded(Err(refused())));
        board.update(Message::Delete(1));
        board.update(Message::Deleted(Ok(())));
        assert_eq!(board.status(), ConnectivityStatus::Online);
    }

    #[test]
    fn last_delete_while_offline_shows_banner() {
        let mut board = loaded(vec![RemoteTask::new(1, "water plants")]);
        board.update(Message::Delete(1));
        assert!(!board.show_unreachable());
        board.update(Message::Deleted(Err(refused())));
        assert!(board.show_unreachable());
    }

    #[test]
    fn filters_partition_after_mixed_updates() {
        let mut board = loaded(vec![
            RemoteTask::new(1, "a"),
            RemoteTask::new(2, "b"),
            RemoteTask::new(3, "c"),
        ]);
        board.update(Message::Toggle(1));
        board.update(Message::Toggle(3));
        board.update(Message::Created(Ok(RemoteTask::new(4, "d")), Priority::Low));

        let all = board.view(Filter::All);
        let active = board.view(Filter::Active);
        let completed = board.view(Filter::Completed);
        assert_eq!(active.len() + completed.len(), all.len());
        assert!(active.iter().all(|t| !completed.contains(t)));
        assert!(all.iter().all(|t| active.contains(t) || completed.contains(t)));

        let stats = board.stats();
        assert_eq!((stats.total, stats.active, stats.completed), (4, 2, 2));
        assert_eq!(board.progress(), 50);
    }

    #[test]
    fn selected_filter_drives_visible() {
        let mut board = loaded(vec![RemoteTask::new(1, "a"), RemoteTask::new(2, "b")]);
        board.update(Message::Toggle(2));
        board.update(Message::SetFilter(Filter::Completed));
        let visible = board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].backend_id, 2);
        // Filtering leaves the collection intact.
        assert_eq!(board.tasks().len(), 2);
    }

    #[test]
    fn progress_is_zero_without_tasks() {
        let board = loaded(vec![]);
        assert_eq!(board.progress(), 0);
    }
}
