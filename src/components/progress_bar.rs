const WIDTH: usize = 20;

pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * WIDTH / 100;
    format!(
        "Progress [{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(WIDTH - filled),
        percent
    )
}
