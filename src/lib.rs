//! Word n-gram frequency tables.
//!
//! Text is split on whitespace into tokens; for each requested order *n* the
//! contiguous token windows are counted, ranked by descending count (ties
//! broken lexicographically) and written as tab-separated rows.

pub mod config;
pub mod driver;
pub mod error;
pub mod gram;
pub mod gram_counter;
pub mod loader;
pub mod logging;
pub mod ranking;
pub mod record;
pub mod tokenizer;
pub mod writer;

pub use config::{OutputTarget, RunConfig};
pub use error::{ConfigError, GramError};
pub use gram::WordGram;
pub use gram_counter::{count_multiple, count_ngrams, generate_ngrams, par_count_ngrams, GramCounter};
pub use loader::{InputFormat, TextSource};
pub use ranking::{combined_records, serialize};
pub use record::{CountRecord, OrderedRecord};
pub use tokenizer::{tokenize, Tokenizer};
