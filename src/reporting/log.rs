use chrono::{DateTime, Utc};

use std::cmp::Ordering;
use std::fmt;

type Timestamp = i64;

const MAX_LOG_SIZE_FOR_TERMINAL: usize = 100;

#[derive(Debug, Eq, PartialEq, PartialOrd, Clone, Copy)]
pub enum Level {
    Debug,
    Info,
    Error
}

#[derive(Eq, PartialEq, Debug)]
pub struct Log {
    timestamp: Timestamp,
    module: String,
    level: Level,
    content: String
}

impl Log {
    pub(super) fn get_level(&self) -> Level {
        self.level
    }

    pub(super) fn truncate(&mut self) {
        if self.content.len() > MAX_LOG_SIZE_FOR_TERMINAL {
            let mut cut = MAX_LOG_SIZE_FOR_TERMINAL;
            while !self.content.is_char_boundary(cut) {
                cut -= 1;
            }
            self.content.truncate(cut);
            self.content.push_str(" (...)");
        }
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp_micros(self.timestamp) {
            Some(datetime) => {
                write!(f, "[{}][{}][{:?}] {}", datetime.to_rfc3339(), self.module, self.level, self.content)
            }
            None => Err(fmt::Error{})
        }
    }
}

impl PartialOrd for Log {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Log {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

pub fn create(module: &str, level: Level, content: String) -> Log {
    assert!(!module.is_empty());
    assert!(!content.is_empty());
    Log { timestamp: Utc::now().timestamp_micros(), module: module.to_string(), level: level, content: content }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[test]
fn test_log_format() {
    let before = Utc::now();
    let mut line = format!("{}", create("dogs", Level::Info, "Golden retriever created".to_string()));
    assert!(line.ends_with("[dogs][Info] Golden retriever created"));

    let tail = line.split_off(line.find("][").unwrap());
    assert_eq!(tail, "][dogs][Info] Golden retriever created");
    let _ = line.remove(0);
    let parsed_datetime = DateTime::parse_from_rfc3339(line.as_str());
    assert!(parsed_datetime.is_ok());
    assert!(parsed_datetime.unwrap().timestamp() >= before.timestamp());

    let error_line = format!("{}", create("best_practices", Level::Error, "not numeric".to_string()));
    assert!(error_line.ends_with("[best_practices][Error] not numeric"));
}

#[test]
fn test_log_ordering() {
    use std::collections::BTreeSet;

    let mut log_set = BTreeSet::<Log>::new();
    for i in 0..5 {
        log_set.insert(create("address_book", Level::Debug, format!("entry {}", i)));
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    let mut last_log: Option<&Log> = None;
    for log in &log_set {
        if let Some(ll) = last_log {
            assert!(ll < log);
        }
        last_log = Some(log);
    }
    assert_eq!(log_set.len(), 5);
}

#[test]
fn test_level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Error);
}

#[test]
fn test_log_truncate() {
    let mut short = create("conference", Level::Info, "short".to_string());
    short.truncate();
    assert_eq!(short.content, "short");

    let mut long = create("conference", Level::Info, "x".repeat(150));
    long.truncate();
    assert_eq!(long.content.len(), MAX_LOG_SIZE_FOR_TERMINAL + " (...)".len());
    assert!(long.content.ends_with(" (...)"));

    let mut multibyte = create("conference", Level::Info, "ż".repeat(80));
    multibyte.truncate();
    assert!(multibyte.content.ends_with(" (...)"));
}
