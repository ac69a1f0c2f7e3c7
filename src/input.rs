use garden_tasks::core::task::{Priority, ViewTask};
use garden_tasks::core::view::Filter;
use garden_tasks::message::Message;

pub const HELP: &str = "\
Commands:
  add <text>           plant a task (bare text works too)
  toggle <n>           mark row n done / not done
  rm <n>               delete row n
  priority <level>     urgent | high | medium | low, used for new tasks
  filter <view>        all | active | completed
  refresh              redraw
  help                 this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Send(Vec<Message>),
    Refresh,
    Help,
    Quit,
}

/// Turn a typed line into messages. Row numbers refer to `visible`.
pub fn parse_line(line: &str, visible: &[ViewTask]) -> Result<Action, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "" | "refresh" => Action::Refresh,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        "add" => submit(rest),
        "toggle" | "t" => Action::Send(vec![Message::Toggle(row(rest, visible)?.backend_id)]),
        "rm" | "delete" => Action::Send(vec![Message::Delete(row(rest, visible)?.backend_id)]),
        "priority" | "p" => {
            let priority = Priority::from_keyword(rest).ok_or_else(|| {
                let known: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
                format!("Unknown priority: {} (one of {})", rest, known.join(", "))
            })?;
            Action::Send(vec![Message::SetPriority(priority)])
        }
        "filter" | "f" => {
            let filter = Filter::from_keyword(rest).ok_or_else(|| format!("Unknown filter: {}", rest))?;
            Action::Send(vec![Message::SetFilter(filter)])
        }
        _ => submit(line),
    };
    Ok(action)
}

fn submit(text: &str) -> Action {
    Action::Send(vec![Message::InputChanged(text.to_string()), Message::Submit])
}

fn row<'a>(arg: &str, visible: &'a [ViewTask]) -> Result<&'a ViewTask, String> {
    let n: usize = arg
        .parse()
        .map_err(|_| format!("Expected a row number, got {:?}", arg))?;
    n.checked_sub(1)
        .and_then(|i| visible.get(i))
        .ok_or_else(|| format!("No row {}", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ViewTask> {
        vec![
            ViewTask {
                id: "8".into(),
                backend_id: 8,
                task: "water plants".into(),
                completed: false,
                priority: Priority::Medium,
            },
            ViewTask {
                id: "3".into(),
                backend_id: 3,
                task: "weed".into(),
                completed: true,
                priority: Priority::Low,
            },
        ]
    }

    #[test]
    fn rows_map_to_backend_ids() {
        assert_eq!(
            parse_line("toggle 2", &rows()),
            Ok(Action::Send(vec![Message::Toggle(3)]))
        );
        assert_eq!(
            parse_line("rm 1", &rows()),
            Ok(Action::Send(vec![Message::Delete(8)]))
        );
        assert!(parse_line("rm 0", &rows()).is_err());
        assert!(parse_line("rm 3", &rows()).is_err());
        assert!(parse_line("toggle x", &rows()).is_err());
    }

    #[test]
    fn bare_text_is_added() {
        assert_eq!(
            parse_line("buy seeds", &[]),
            Ok(Action::Send(vec![
                Message::InputChanged("buy seeds".into()),
                Message::Submit
            ]))
        );
        assert_eq!(
            parse_line("add  buy seeds ", &[]),
            Ok(Action::Send(vec![
                Message::InputChanged("buy seeds".into()),
                Message::Submit
            ]))
        );
    }

    #[test]
    fn settings_and_controls() {
        assert_eq!(
            parse_line("priority urgent", &[]),
            Ok(Action::Send(vec![Message::SetPriority(Priority::Critical)]))
        );
        assert_eq!(
            parse_line("filter active", &[]),
            Ok(Action::Send(vec![Message::SetFilter(Filter::Active)]))
        );
        assert!(parse_line("filter someday", &[]).is_err());
        assert_eq!(parse_line("", &[]), Ok(Action::Refresh));
        assert_eq!(parse_line("QUIT", &[]), Ok(Action::Quit));
    }
}
