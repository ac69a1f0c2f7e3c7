use chrono::{Local, NaiveTime, Timelike};

/// Format a wall-clock time as `h:mm AM`.
pub fn format_clock(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}

pub fn now() -> String {
    format_clock(Local::now().time())
}
