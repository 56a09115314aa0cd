// Tue Jan 13 2026 - Alex

use crate::template::{InputLine, TemplateResult};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Yields the ordered lines of one input.
pub trait SourceLoader: Send + Sync {
    fn load(&self) -> TemplateResult<Vec<InputLine>>;
    fn name(&self) -> String;
}

/// Consumes a generated artifact.
pub trait OutputWriter: Send + Sync {
    fn write(&self, name: &str, text: &str) -> TemplateResult<()>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceLoader for FileSource {
    fn load(&self) -> TemplateResult<Vec<InputLine>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(split_lines(&text))
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct MemorySource {
    name: String,
    text: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl SourceLoader for MemorySource {
    fn load(&self) -> TemplateResult<Vec<InputLine>> {
        Ok(split_lines(&self.text))
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Writes each artifact next to its input, or to a fixed path.
pub struct FileOutput {
    target: FileTarget,
}

enum FileTarget {
    Suffix(String),
    Fixed(PathBuf),
}

impl FileOutput {
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            target: FileTarget::Suffix(suffix.into()),
        }
    }

    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            target: FileTarget::Fixed(path.into()),
        }
    }

    pub fn destination(&self, name: &str) -> PathBuf {
        match &self.target {
            FileTarget::Suffix(suffix) => PathBuf::from(format!("{}{}", name, suffix)),
            FileTarget::Fixed(path) => path.clone(),
        }
    }
}

impl OutputWriter for FileOutput {
    fn write(&self, name: &str, text: &str) -> TemplateResult<()> {
        let path = self.destination(name);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, text)?;
        log::debug!("wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

pub struct StdoutOutput;

impl OutputWriter for StdoutOutput {
    fn write(&self, _name: &str, text: &str) -> TemplateResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryOutput {
    written: Mutex<HashMap<String, String>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.written.lock().ok()?.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.written.lock().map(|w| w.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputWriter for MemoryOutput {
    fn write(&self, name: &str, text: &str) -> TemplateResult<()> {
        if let Ok(mut written) = self.written.lock() {
            written.insert(name.to_string(), text.to_string());
        }
        Ok(())
    }
}

/// Splits on `\n`, dropping a trailing `\r` so CRLF input reads the same.
fn split_lines(text: &str) -> Vec<InputLine> {
    InputLine::from_lines(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_splits_crlf() {
        let source = MemorySource::new("input", "void sub_1(a1)\r\n  *(_DWORD *)(a1 + 4) = 0;\r\n");
        let lines = source.load().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text(), "  *(_DWORD *)(a1 + 4) = 0;");
        assert_eq!(lines[1].number(), 2);
    }

    #[test]
    fn test_file_output_destination() {
        let output = FileOutput::with_suffix(".cs");
        assert_eq!(output.destination("dumps/sub_1.txt"), PathBuf::from("dumps/sub_1.txt.cs"));

        let output = FileOutput::to_path("out/Template.cs");
        assert_eq!(output.destination("anything"), PathBuf::from("out/Template.cs"));
    }

    #[test]
    fn test_memory_output_records_writes() {
        let output = MemoryOutput::new();
        assert!(output.is_empty());
        output.write("a", "class A").unwrap();
        assert_eq!(output.get("a").as_deref(), Some("class A"));
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/raw-template-input.txt");
        assert!(matches!(source.load(), Err(crate::template::TemplateError::Io(_))));
    }
}
