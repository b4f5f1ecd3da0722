use std::{
    io,
    path::{Path, PathBuf},
};

/// Header line placed at the top of every generated artifact.
pub const GENERATED_HEADER: &str = "Generated by droute. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the path that was written.
    ///
    /// The content is rendered once and written in a single call; parent
    /// directories are created as needed.
    fn write(&self, base: &Path) -> io::Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating parent directories first.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
