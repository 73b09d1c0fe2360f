//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use clipstash_testing::TestData;
use clipstash_types::{ClipItem, ItemId};

pub struct TestFixture {
    data: TestData,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            data: TestData::new().expect("Failed to create test data dir"),
        }
    }

    /// Command pointed at this fixture's data directory, with the
    /// environment that could leak into detection scrubbed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("clipstash").expect("binary under test");
        cmd.arg("--data-dir")
            .arg(self.data.data_dir())
            .env_remove("CLIPSTASH_PATH")
            .env_remove("COLORTERM");
        cmd
    }

    pub fn write_history(&self, items: &[ClipItem]) {
        self.data.write_history(items).expect("write history");
    }

    pub fn write_history_raw(&self, body: &str) {
        self.data.write_history_raw(body).expect("write history");
    }

    pub fn write_pinned(&self, ids: &[ItemId]) {
        self.data.write_pinned(ids).expect("write pinned");
    }

    pub fn create_empty_pinned_dir(&self) {
        self.data.create_empty_pinned_dir().expect("create pinned dir");
    }

    pub fn data(&self) -> &TestData {
        &self.data
    }
}

/// Platform line terminator used between records.
pub fn line_ending() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}
