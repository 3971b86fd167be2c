//! Shared fixtures for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// A small chain of command: boss -> lieutenant -> soldier
pub const CHAIN_NETWORK: &str = r#"{
  "relations": [
    { "source": "boss", "target": "lieutenant", "kind": "Control" },
    { "source": "lieutenant", "target": "soldier", "kind": "Control" }
  ]
}"#;

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Newline-separated series whose magnitudes are spread evenly in log space
pub fn natural_series_text(n: usize) -> String {
    (0..n)
        .map(|k| {
            let v = 10f64.powf((k as f64 + 0.5) / n as f64 * 4.0);
            format!("{:.3}", v)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
