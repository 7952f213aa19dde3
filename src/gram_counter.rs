use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use ahash::AHashMap;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

use crate::error::GramError;
use crate::gram::WordGram;

/// Inputs with more tokens than this are counted in parallel chunks.
pub const PAR_THRESHOLD: usize = 1 << 20;

/// Number of n-gram offsets handled by one worker when counting in chunks.
pub const PAR_CHUNK_SIZE: usize = 1 << 16;

/// Occurrence count of a gram plus the offset where it was first seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tally {
    count: usize,
    first: usize,
}

/// Frequency table of word n-grams for a fixed order *n*.
#[derive(Debug, Clone)]
pub struct GramCounter<'a> {
    order: usize,
    /// Map from n-gram to count
    table: AHashMap<WordGram<'a>, Tally>,
}

impl PartialEq for GramCounter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.table.len() == other.table.len()
            && self
                .table
                .iter()
                .all(|(gram, tally)| other.table.get(gram) == Some(tally))
    }
}

impl Eq for GramCounter<'_> {}

fn check_order(n: usize) -> Result<(), GramError> {
    if n == 0 {
        return Err(GramError::InvalidArgument("n must be >= 1".to_owned()));
    }
    Ok(())
}

impl<'a> GramCounter<'a> {
    /// Create an empty counter for grams of order `n`.
    pub fn new(n: usize) -> Result<Self, GramError> {
        check_order(n)?;
        Ok(Self::empty(n))
    }

    fn empty(n: usize) -> Self {
        Self {
            order: n,
            table: AHashMap::new(),
        }
    }

    /// The order *n* shared by every gram in the counter.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Get the count of a gram, 0 if it was never observed.
    pub fn get(&self, gram: &[String]) -> usize {
        self.table.get(gram).map_or(0, |tally| tally.count)
    }

    /// Offset of the first occurrence of a gram in the token stream.
    pub fn first_offset(&self, gram: &[String]) -> Option<usize> {
        self.table.get(gram).map(|tally| tally.first)
    }

    /// Iterate over all n-grams and their counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (WordGram<'a>, usize)> + '_ {
        self.table.iter().map(|(gram, tally)| (*gram, tally.count))
    }

    /// Like [`GramCounter::iter`], also yielding first-occurrence offsets.
    pub(crate) fn iter_with_offsets(&self) -> impl Iterator<Item = (WordGram<'a>, usize, usize)> + '_ {
        self.table
            .iter()
            .map(|(gram, tally)| (*gram, tally.count, tally.first))
    }

    /// The number of distinct n-grams in the counter.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sum of all counts, i.e. the number of grams observed with repetition.
    pub fn total(&self) -> usize {
        self.table.values().map(|tally| tally.count).sum()
    }

    #[inline]
    fn observe(&mut self, gram: WordGram<'a>, offset: usize) {
        let tally = self.table.entry(gram).or_insert(Tally {
            count: 0,
            first: offset,
        });
        tally.count += 1;
        tally.first = tally.first.min(offset);
    }

    /// Count the grams starting at the given offsets of `tokens`. Offsets past
    /// the last full window are ignored.
    pub fn update_from(&mut self, tokens: &'a [String], offsets: Range<usize>) {
        let num_grams = (tokens.len() + 1).saturating_sub(self.order);
        let end = offsets.end.min(num_grams);
        for offset in offsets.start..end {
            self.observe(WordGram::new(&tokens[offset..offset + self.order]), offset);
        }
    }

    /// Add the counts of `other` into this counter.
    pub fn merge(&mut self, other: &Self) -> Result<(), GramError> {
        if self.order != other.order {
            return Err(GramError::InvalidArgument(format!(
                "cannot merge {}-grams into {}-grams",
                other.order, self.order
            )));
        }
        for (gram, tally) in other.table.iter() {
            self.absorb_one(*gram, *tally);
        }
        Ok(())
    }

    fn absorb(mut self, mut other: Self) -> Self {
        if self.table.len() < other.table.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (gram, tally) in other.table {
            self.absorb_one(gram, tally);
        }
        self
    }

    #[inline]
    fn absorb_one(&mut self, gram: WordGram<'a>, tally: Tally) {
        self.table
            .entry(gram)
            .and_modify(|mine| {
                mine.count += tally.count;
                mine.first = mine.first.min(tally.first);
            })
            .or_insert(tally);
    }
}

/// Lazily yields every n-gram of `tokens` in increasing offset order.
///
/// Yields nothing when there are fewer than `n` tokens.
pub fn generate_ngrams(
    tokens: &[String],
    n: usize,
) -> Result<impl Iterator<Item = WordGram<'_>>, GramError> {
    check_order(n)?;
    Ok(tokens.windows(n).map(WordGram::new))
}

/// Counts the n-grams of `tokens` in a single pass.
pub fn count_ngrams(tokens: &[String], n: usize) -> Result<GramCounter<'_>, GramError> {
    let mut counter = GramCounter::new(n)?;
    for (offset, gram) in generate_ngrams(tokens, n)?.enumerate() {
        counter.observe(gram, offset);
    }
    Ok(counter)
}

/// Counts the n-grams of `tokens` by splitting the offsets into chunks of
/// `chunk_size`. Each chunk is counted into its own partial table; partial
/// tables are merged by adding counts.
pub fn par_count_ngrams(
    tokens: &[String],
    n: usize,
    chunk_size: usize,
) -> Result<GramCounter<'_>, GramError> {
    check_order(n)?;
    let chunk_size = chunk_size.max(1);
    let num_grams = (tokens.len() + 1).saturating_sub(n);
    let num_chunks = num_grams.div_ceil(chunk_size);

    let counter = (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * chunk_size;
            let mut partial = GramCounter::empty(n);
            partial.update_from(tokens, start..start.saturating_add(chunk_size));
            partial
        })
        .reduce(|| GramCounter::empty(n), GramCounter::absorb);
    Ok(counter)
}

/// Counts n-grams independently for each requested order.
pub fn count_multiple<'a>(
    tokens: &'a [String],
    orders: &[usize],
) -> Result<BTreeMap<usize, GramCounter<'a>>, GramError> {
    count_multiple_with_progress(tokens, orders, &ProgressBar::hidden())
}

/// [`count_multiple`], ticking `pb` once per finished order.
pub fn count_multiple_with_progress<'a>(
    tokens: &'a [String],
    orders: &[usize],
    pb: &ProgressBar,
) -> Result<BTreeMap<usize, GramCounter<'a>>, GramError> {
    let orders: BTreeSet<usize> = orders.iter().copied().collect();
    for &n in &orders {
        check_order(n)?;
    }
    pb.set_length(orders.len() as u64);

    orders
        .into_par_iter()
        .progress_with(pb.clone())
        .map(|n| {
            let counter = if tokens.len() > PAR_THRESHOLD {
                par_count_ngrams(tokens, n, PAR_CHUNK_SIZE)?
            } else {
                count_ngrams(tokens, n)?
            };
            Ok((n, counter))
        })
        .collect()
}
