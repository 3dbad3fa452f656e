#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use docs_catalog::{Category, DocumentationEntry};
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn cli_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docs-catalog"));
    cmd.env_remove("DOCS_CATALOG_BASE")
        .env_remove("DOCS_CATALOG_SCHEMA")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout is not JSON")
}

pub fn entry(id: &str, name: &str, category: Category) -> DocumentationEntry {
    DocumentationEntry::new(
        id,
        name,
        "测试条目。",
        category,
        &format!("/{id}/java/"),
        &format!("https://github.com/example/{id}"),
    )
}

pub fn write_json(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.flush()?;
    Ok(file)
}
