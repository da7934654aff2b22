use crate::reporting::{log, log::Log};

use crossterm::style::Stylize;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub type LogSender = tokio::sync::mpsc::UnboundedSender<Log>;
pub type LogReceiver = tokio::sync::mpsc::UnboundedReceiver<Log>;

pub struct Reporter {
    log_receiver: LogReceiver,
    log_file: Option<File>,
    log_level: log::Level
}

impl Reporter {
    pub fn create(log_receiver: LogReceiver, log_file_path: Option<PathBuf>, log_level: &str) -> Result<Self, std::io::Error> {
        let log_lvl = match log_level {
            "debug" => log::Level::Debug,
            "info" => log::Level::Info,
            "error" => log::Level::Error,
            invalid => { return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Invalid logging level: {}. Available: debug, info, error", invalid))); }
        };

        let log_file = match log_file_path {
            Some(path) => Some(File::create(path)?),
            None => None
        };

        Ok(Reporter { log_receiver: log_receiver, log_file: log_file, log_level: log_lvl })
    }

    /// Runs until every `LogSender` is dropped.
    pub async fn run(mut self) {
        while let Some(mut received_log) = self.log_receiver.recv().await {
            if received_log.get_level() < self.log_level {
                continue;
            }

            if let Some(file) = self.log_file.as_mut() {
                if let Err(e) = writeln!(file, "{}", received_log) {
                    eprintln!("{}", log::create("reporter", log::Level::Error, format!("Could not save log to file: {}", e)));
                }
            }

            received_log.truncate();
            let line = format!("{}", received_log);
            match received_log.get_level() {
                log::Level::Debug => eprintln!("{}", line.dark_grey()),
                log::Level::Info => eprintln!("{}", line),
                log::Level::Error => eprintln!("{}", line.red())
            }
        }

        if let Some(file) = self.log_file.as_mut() {
            let _ = file.flush();
        }
    }
}

// -----------------------------------------------
// TESTS
// -----------------------------------------------

#[cfg(test)]
fn temp_log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("coursework_{}_{}.log", name, std::process::id()))
}

#[test]
fn test_invalid_level() {
    let (_log_sender, log_receiver) = tokio::sync::mpsc::unbounded_channel::<Log>();
    let result = Reporter::create(log_receiver, None, "verbose");
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().kind(), std::io::ErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_reporter_filters_by_level() {
    let path = temp_log_path("filter");
    let (log_sender, log_receiver) = tokio::sync::mpsc::unbounded_channel::<Log>();
    let reporter = Reporter::create(log_receiver, Some(path.clone()), "info").unwrap();
    let handle = tokio::spawn(reporter.run());

    assert!(log_sender.send(log::create("dogs", log::Level::Debug, "hidden".to_string())).is_ok());
    assert!(log_sender.send(log::create("dogs", log::Level::Info, "shown".to_string())).is_ok());
    assert!(log_sender.send(log::create("dogs", log::Level::Error, "also shown".to_string())).is_ok());
    drop(log_sender);
    handle.await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[dogs][Info] shown"));
    assert!(lines[1].ends_with("[dogs][Error] also shown"));
}

#[tokio::test]
async fn test_reporter_keeps_full_content_in_file() {
    let path = temp_log_path("full");
    let (log_sender, log_receiver) = tokio::sync::mpsc::unbounded_channel::<Log>();
    let reporter = Reporter::create(log_receiver, Some(path.clone()), "debug").unwrap();
    let handle = tokio::spawn(reporter.run());

    let long_content = "a".repeat(250);
    assert!(log_sender.send(log::create("conference", log::Level::Debug, long_content.clone())).is_ok());
    drop(log_sender);
    handle.await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(written.trim_end().ends_with(&long_content));
    assert!(!written.contains("(...)"));
}
