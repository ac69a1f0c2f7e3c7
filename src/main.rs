use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

mod components;
mod input;
mod pages;

use garden_tasks::application::TaskBoard;
use garden_tasks::config::GardenConfig;
use garden_tasks::core::clock;
use garden_tasks::runtime::Runtime;
use garden_tasks::sync::http::HttpTaskStore;

use input::{Action, HELP, parse_line};

/// Journal logger that lets this crate through at info/debug (per the debug
/// toggle) and everything else at warn.
struct FilteredJournal {
    inner: systemd_journal_logger::JournalLog,
}

impl log::Log for FilteredJournal {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        if metadata.target().starts_with("garden_tasks") {
            let max = if garden_tasks::debug_logging() {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };
            metadata.level() <= max
        } else {
            metadata.level() <= log::LevelFilter::Warn
        }
    }
    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }
    fn flush(&self) {
        self.inner.flush();
    }
}

// Logs go to the user journal (`journalctl --user -t garden-tasks -f`) so they
// never interleave with the page on stdout.
fn init_logging() {
    match systemd_journal_logger::JournalLog::new() {
        Ok(journal) => {
            let journal = journal.with_syslog_identifier("garden-tasks".to_string());
            if log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).is_ok() {
                // Global max must be Debug so crate debug logs can pass through when toggled
                log::set_max_level(log::LevelFilter::Debug);
            }
        }
        Err(e) => eprintln!("journal unavailable, logging disabled: {}", e),
    }
}

struct Args {
    api_url: Option<String>,
    debug: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        api_url: None,
        debug: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--api-url" => {
                args.api_url = Some(iter.next().ok_or("--api-url needs a value")?);
            }
            "--debug" => args.debug = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = parse_args()?;
    let mut config = GardenConfig::load();
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    garden_tasks::set_debug_logging(config.debug_logging || args.debug);
    log::info!("Using backend {}", config.api_url);

    let store = HttpTaskStore::new(&config.api_url)?;
    let api_url = store.base_url().to_string();
    let mut runtime = Runtime::new(store);

    let (mut board, command) = TaskBoard::init(config.default_priority);
    runtime.spawn(command);

    let mut clock_text = clock::now();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", pages::list::list_view(&board, &api_url, &clock_text));
    println!("Type `help` for commands.");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                clock_text = clock::now();
            }

            Some(message) = runtime.next() => {
                runtime.dispatch(&mut board, message);
                println!("{}", pages::list::list_view(&board, &api_url, &clock_text));
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line, &board.visible()) {
                    Ok(Action::Send(messages)) => {
                        for message in messages {
                            runtime.dispatch(&mut board, message);
                        }
                        println!("{}", pages::list::list_view(&board, &api_url, &clock_text));
                    }
                    Ok(Action::Refresh) => {
                        println!("{}", pages::list::list_view(&board, &api_url, &clock_text));
                    }
                    Ok(Action::Help) => println!("{}", HELP),
                    Ok(Action::Quit) => break,
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    if runtime.pending() > 0 {
        log::info!("Exiting with {} calls still in flight", runtime.pending());
    }

    Ok(())
}
