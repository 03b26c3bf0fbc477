use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Keeps every record in memory. Tests of one binary share it, so each test
/// filters the lines by the queue name it alone uses.
struct CapturingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Debug);
    });
}

pub fn lines_containing(text: &str) -> Vec<(Level, String)> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, line)| line.contains(text))
        .cloned()
        .collect()
}

pub fn teardown_lines(queue_name: &str) -> usize {
    lines_containing(&format!("teardown - connection to queue {} closed", queue_name)).len()
}

pub fn closed_state_lines(queue_name: &str) -> usize {
    lines_containing(&format!("state = closed, queue = {}", queue_name)).len()
}
