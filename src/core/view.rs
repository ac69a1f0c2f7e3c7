use std::collections::HashMap;

use super::task::{LocalMeta, RemoteTask, ViewTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Self::All, Self::Active, Self::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Some(Self::All),
            "ACTIVE" => Some(Self::Active),
            "COMPLETED" | "DONE" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, task: &ViewTask) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.is_active(),
            Self::Completed => task.completed,
        }
    }

    /// Message shown when this filter yields nothing.
    pub fn empty_text(&self) -> &'static str {
        match self {
            Self::All => "Plant your first task",
            Self::Active => "All done!",
            Self::Completed => "Nothing completed yet",
        }
    }
}

/// Join every remote task with its metadata, keeping remote order.
///
/// A task without metadata is shown with the default meta.
pub fn merge(remote: &[RemoteTask], meta: &HashMap<String, LocalMeta>) -> Vec<ViewTask> {
    remote
        .iter()
        .map(|rt| {
            let m = meta.get(&rt.meta_key()).copied().unwrap_or_default();
            ViewTask::join(rt, m)
        })
        .collect()
}

pub fn filtered(tasks: &[ViewTask], filter: Filter) -> Vec<ViewTask> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Aggregate counts over a merged task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Stats {
    pub fn of(tasks: &[ViewTask]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    /// Completion percentage, rounded to the nearest integer. Zero tasks is 0%.
    pub fn progress(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.completed as f64 / self.total as f64) * 100.0;
        pct.round() as u8
    }
}

/// "1 task", "3 tasks".
pub fn task_count(n: usize) -> String {
    if n == 1 {
        format!("{} task", n)
    } else {
        format!("{} tasks", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::Priority;

    fn sample() -> (Vec<RemoteTask>, HashMap<String, LocalMeta>) {
        let remote = vec![
            RemoteTask::new(3, "turn compost"),
            RemoteTask::new(1, "water plants"),
            RemoteTask::new(2, "buy seeds"),
        ];
        let mut meta = HashMap::new();
        meta.insert(
            "1".to_string(),
            LocalMeta {
                completed: true,
                priority: Priority::High,
            },
        );
        meta.insert("2".to_string(), LocalMeta::default());
        (remote, meta)
    }

    #[test]
    fn merge_keeps_remote_order_and_defaults_missing_meta() {
        let (remote, meta) = sample();
        let merged = merge(&remote, &meta);
        let ids: Vec<i64> = merged.iter().map(|t| t.backend_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(!merged[0].completed);
        assert_eq!(merged[0].priority, Priority::Medium);
        assert!(merged[1].completed);
        assert_eq!(merged[1].priority, Priority::High);
    }

    #[test]
    fn active_and_completed_partition_all() {
        let (remote, meta) = sample();
        let all = merge(&remote, &meta);
        let active = filtered(&all, Filter::Active);
        let completed = filtered(&all, Filter::Completed);

        assert_eq!(active.len() + completed.len(), all.len());
        for task in &all {
            let in_active = active.contains(task);
            let in_completed = completed.contains(task);
            assert!(in_active ^ in_completed, "{} must be in exactly one view", task.id);
        }
        assert_eq!(filtered(&all, Filter::All), all);
    }

    #[test]
    fn progress_of_empty_list_is_zero() {
        let stats = Stats::of(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.progress(), 0);
    }

    #[test]
    fn progress_rounds_to_nearest() {
        let (remote, meta) = sample();
        let stats = Stats::of(&merge(&remote, &meta));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.progress(), 33);

        let two_of_three = Stats {
            total: 3,
            active: 1,
            completed: 2,
        };
        assert_eq!(two_of_three.progress(), 67);
    }

    #[test]
    fn task_count_pluralizes() {
        assert_eq!(task_count(0), "0 tasks");
        assert_eq!(task_count(1), "1 task");
        assert_eq!(task_count(4), "4 tasks");
    }
}
