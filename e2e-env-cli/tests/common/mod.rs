//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - A temporary `bin` directory holding fake `kubectl` and `gcloud` scripts
//! - Command builders that put that directory first on `PATH`

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Context reported by the default fake `kubectl`.
pub const GKE_CONTEXT: &str = "gke_knative-tests_us-central1_e2e-cluster";

/// Listing reported by the default fake `gcloud`.
pub const GCLOUD_LISTING: &str = "prow us-west1\ne2e-cluster us-central1";

/// Test environment with an isolated tool directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory prepended to `PATH`
    pub bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an environment with no tools installed.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        Self { temp_dir, bin_dir }
    }

    /// Create an environment whose tools describe a GKE cluster.
    pub fn gke() -> Self {
        let env = Self::new();
        env.fake_tool("kubectl", &format!("echo '{GKE_CONTEXT}'"));
        env.fake_tool("gcloud", &format!("printf '{GCLOUD_LISTING}\\n'"));
        env
    }

    /// Install an executable shell script named `name` running `body`.
    pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin_dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
        path
    }

    /// Get the bin directory.
    pub fn path(&self) -> &Path {
        &self.bin_dir
    }

    /// Command with the fake tools first on `PATH` and no inherited
    /// `KO_DOCKER_REPO` or `E2E_LOG_MODE`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("e2e-env").expect("Failed to find e2e-env binary");
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut dirs = vec![self.bin_dir.clone()];
                dirs.extend(std::env::split_paths(&existing));
                std::env::join_paths(dirs).expect("Failed to join PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };
        cmd.env("PATH", path)
            .env_remove("KO_DOCKER_REPO")
            .env_remove("E2E_LOG_MODE");
        cmd
    }

    /// Command whose `PATH` holds only the fake tools.
    pub fn command_isolated(&self) -> Command {
        let mut cmd = Command::cargo_bin("e2e-env").expect("Failed to find e2e-env binary");
        cmd.env("PATH", &self.bin_dir)
            .env_remove("KO_DOCKER_REPO")
            .env_remove("E2E_LOG_MODE");
        cmd
    }
}
