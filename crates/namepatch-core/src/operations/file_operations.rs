use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Reads `path` as text with `\r\n` and lone `\r` line endings turned into `\n`.
pub fn read_text_content(path: &Path) -> Result<String> {
    let content = read_file_content(path)?;
    Ok(normalize_newlines(content))
}

pub fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

pub fn write_file_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {:?}", path))
}
