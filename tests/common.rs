use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for hoproute, isolated from any user config
pub fn hoproute(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("hoproute");
    cmd.env("HOPROUTE_CONFIG_DIR", config_dir)
        .env_remove("HOPROUTE_CONFIG")
        .env_remove("HOPROUTE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
/// Write an edge-list file and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
/// 0 -> 1 costs 5 directly but 2 via vertex 2
pub const DETOUR: &str = "3 3\n0 1 5.0\n0 2 1.0\n2 1 1.0\n";

#[allow(dead_code)]
/// Vertex 2 has no incoming edges
pub const DISCONNECTED: &str = "3 1\n0 1 1.0\n";
