use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

use crate::loader::TextSource;

pub struct GzTextFileLoader {
    filepath: PathBuf,
}

impl GzTextFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl TextSource for GzTextFileLoader {
    fn read_text(&self) -> Result<String> {
        let file = File::open(&self.filepath)
            .with_context(|| format!("failed to open {}", self.filepath.display()))?;
        let mut reader = BufReader::new(GzDecoder::new(file));
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_context(|| format!("failed to decompress {}", self.filepath.display()))?;
        Ok(text)
    }
}
