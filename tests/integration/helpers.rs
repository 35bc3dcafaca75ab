//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

use loadmark::session::{Edge, ItemId, LoadId, Session};

/// Scratch directory holding session files and an isolated config path.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config file the binary is pointed at. Absent unless written.
    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read file")
    }

    /// Run the loadmark binary and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_loadmark"))
            .args(args)
            .current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env("LOADMARK_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute loadmark");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}

/// Session with the run marked at `run` and one complete load per entry.
pub fn session_with(run: (f64, f64), loads: &[(f64, f64)]) -> (Session, Vec<LoadId>) {
    let mut session = Session::default();
    session.mark_time(ItemId::Run, Edge::Start, run.0).unwrap();
    session.mark_time(ItemId::Run, Edge::End, run.1).unwrap();
    let ids = loads
        .iter()
        .map(|&(start, end)| {
            let id = session.add_load();
            session.mark_time(ItemId::Load(id), Edge::Start, start).unwrap();
            session.mark_time(ItemId::Load(id), Edge::End, end).unwrap();
            id
        })
        .collect();
    (session, ids)
}
