mod flate2;
mod plain;

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

pub use crate::loader::flate2::GzTextFileLoader;
pub use crate::loader::plain::{TextFileLoader, TextLoader};

/// Source of the raw text to be tokenized.
pub trait TextSource {
    /// Returns the whole decoded UTF-8 text.
    fn read_text(&self) -> Result<String>;
}

/// Input file formats supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Gzip when the file name ends in `.gz`, plain text otherwise.
    #[default]
    Auto,
    Plain,
    Gzip,
}

impl InputFormat {
    /// Resolves [`InputFormat::Auto`] against the file name.
    pub fn resolve<P: AsRef<Path>>(self, filepath: P) -> Self {
        match self {
            Self::Auto => {
                let is_gz = filepath
                    .as_ref()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
                if is_gz {
                    Self::Gzip
                } else {
                    Self::Plain
                }
            }
            fmt => fmt,
        }
    }
}

/// Picks the loader for `filepath` in the given format.
pub fn file_source<P: AsRef<Path>>(filepath: P, fmt: InputFormat) -> Box<dyn TextSource> {
    let filepath = filepath.as_ref();
    match fmt.resolve(filepath) {
        InputFormat::Gzip => Box::new(GzTextFileLoader::new(filepath)),
        _ => Box::new(TextFileLoader::new(filepath)),
    }
}
