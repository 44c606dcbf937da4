use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::FileSystem;

/// In-memory files rooted at `/project`, with a user config dir.
pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    cwd: PathBuf,
    user_config: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            cwd: "/project".into(),
            user_config: Some("/home/user/.config/code-gate".into()),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_owned());
        self
    }

    pub fn with_current_dir(self, cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into(), ..self }
    }

    pub fn with_config_dir(self, user_config: Option<PathBuf>) -> Self {
        Self { user_config, ..self }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string())),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.user_config.clone()
    }
}
