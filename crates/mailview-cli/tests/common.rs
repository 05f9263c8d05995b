use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Shared mailbox document used across the CLI tests.
pub const SAMPLE_MAILBOX: &str = r#"{
  "folder": "INBOX",
  "emails": [
    {"id": 1, "from": "alice@example.com", "subject": "Hello", "date": "2026-02-10", "isRead": true},
    {"id": 2, "from": "bob@example.com", "subject": "Re: Hello", "date": "2026-02-11", "isRead": false},
    {"id": 3, "from": "carol@example.com", "subject": "Minutes", "date": "2026-02-12", "isRead": false}
  ]
}"#;

pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write a mailbox document and return its path.
    pub fn write_mailbox(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("mailbox.json");
        std::fs::write(&path, contents).expect("Failed to write mailbox");
        path
    }

    pub fn command(&self) -> Command {
        Command::cargo_bin("mailview").expect("Failed to find mailview binary")
    }
}
