#![allow(dead_code)]

use std::{fs, path::Path};

/// Writes `lines` to `path`, each followed by `\n`, optionally preceded by a header line.
pub fn write_lines(path: &Path, headers: Option<&[&str]>, lines: &[&str], delimiter: &str) {
    let mut content = String::new();
    if let Some(headers) = headers {
        content.push_str(&headers.join(delimiter));
        content.push('\n');
    }
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content).expect("Unable to write test file");
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Unable to read test file")
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
