use super::CatalogStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(ShelfError::Io)
            }
            _ => Ok(()),
        }
    }
}

impl CatalogStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<Vec<Book>> {
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.path.is_dir() {
            return Err(ShelfError::Store(format!(
                "{} is a directory",
                self.path.display()
            )));
        }
        self.ensure_parent_dir()?;

        let mut content = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        books
            .serialize(&mut serializer)
            .map_err(ShelfError::Serialization)?;

        fs::write(&self.path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
