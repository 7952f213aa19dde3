use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::loader::TextSource;

pub struct TextFileLoader {
    filepath: PathBuf,
}

impl TextFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl TextSource for TextFileLoader {
    fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.filepath)
            .with_context(|| format!("failed to read {}", self.filepath.display()))
    }
}

pub struct TextLoader<'a> {
    text: &'a str,
}

impl<'a> TextLoader<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> TextSource for TextLoader<'a> {
    fn read_text(&self) -> Result<String> {
        Ok(self.text.to_owned())
    }
}
