use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

use crate::error::GramError;
use crate::gram_counter::GramCounter;
use crate::record::{CountRecord, OrderedRecord};

/// Total order of output rows: descending count, then ascending gram.
pub fn rank_order(a: &CountRecord, b: &CountRecord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.gram.cmp(&b.gram))
}

/// Turns a row limit into the number of rows to keep. `None` and `Some(0)`
/// keep everything.
fn row_limit(limit: Option<i64>) -> Result<Option<usize>, GramError> {
    match limit {
        None | Some(0) => Ok(None),
        Some(l) if l < 0 => Err(GramError::InvalidArgument(format!(
            "limit must be non-negative, got {}",
            l
        ))),
        Some(l) => Ok(Some(usize::try_from(l).unwrap_or(usize::MAX))),
    }
}

/// Ranks the rows of a frequency table by [`rank_order`], keeping at most
/// `limit` rows.
///
/// ```
/// use wordgrams::{count_ngrams, serialize, tokenize};
///
/// let tokens = tokenize("the cat sat\nthe cat ran");
/// let table = count_ngrams(&tokens, 2).unwrap();
/// let rows: Vec<String> = serialize(&table, None)
///     .unwrap()
///     .iter()
///     .map(|r| r.to_string())
///     .collect();
/// assert_eq!(rows, ["the cat\t2", "cat ran\t1", "cat sat\t1", "sat the\t1"]);
/// ```
pub fn serialize<'a>(
    counter: &GramCounter<'a>,
    limit: Option<i64>,
) -> Result<Vec<CountRecord<'a>>, GramError> {
    let limit = row_limit(limit)?;
    let mut records: Vec<CountRecord<'a>> = counter
        .iter()
        .map(|(gram, count)| CountRecord { gram, count })
        .collect();
    records.sort_unstable_by(rank_order);
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    Ok(records)
}

/// Rows of the combined (legacy) output: ascending order *n*, then descending
/// count. Equal counts keep the order in which grams first appeared in the
/// token stream. `limit` applies to each order separately.
pub fn combined_records<'a>(
    tables: &BTreeMap<usize, GramCounter<'a>>,
    limit: Option<i64>,
) -> Result<Vec<OrderedRecord<'a>>, GramError> {
    let limit = row_limit(limit)?;
    let mut rows = Vec::new();
    for (&order, counter) in tables {
        let mut grams: Vec<_> = counter.iter_with_offsets().collect();
        grams.sort_unstable_by_key(|&(_, count, first)| (Reverse(count), first));
        rows.extend(
            grams
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|(gram, count, _)| OrderedRecord {
                    order,
                    record: CountRecord { gram, count },
                }),
        );
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gram_counter::{count_multiple, count_ngrams};

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn rendered<T: ToString>(rows: &[T]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    /// Tokens whose bigram table is {a b: 2, b c: 5, a c: 2}.
    fn sample_tokens() -> Vec<String> {
        let mut words = Vec::new();
        for _ in 0..5 {
            words.extend(["b", "c", "|"]);
        }
        for _ in 0..2 {
            words.extend(["a", "b", "|", "a", "c", "|"]);
        }
        owned(&words)
    }

    fn without_separator(rows: Vec<String>) -> Vec<String> {
        rows.into_iter().filter(|r| !r.contains('|')).collect()
    }

    #[test]
    fn test_sort_by_count_then_gram() {
        let tokens = sample_tokens();
        let table = count_ngrams(&tokens, 2).unwrap();
        let rows = without_separator(rendered(&serialize(&table, None).unwrap()));
        assert_eq!(rows, ["b c\t5", "a b\t2", "a c\t2"]);
    }

    #[test]
    fn test_limit() {
        let tokens = owned(&["b", "c", "b", "c", "a", "b"]);
        let table = count_ngrams(&tokens, 2).unwrap();

        let rows = rendered(&serialize(&table, Some(1)).unwrap());
        assert_eq!(rows, ["b c\t2"]);

        let all = serialize(&table, None).unwrap();
        assert_eq!(serialize(&table, Some(0)).unwrap(), all);
        assert_eq!(serialize(&table, Some(100)).unwrap(), all);
        assert_eq!(all.len(), table.len());
    }

    #[test]
    fn test_negative_limit_is_invalid() {
        let tokens = owned(&["a", "b"]);
        let table = count_ngrams(&tokens, 1).unwrap();
        assert!(matches!(
            serialize(&table, Some(-1)),
            Err(GramError::InvalidArgument(_))
        ));
        let tables = count_multiple(&tokens, &[1]).unwrap();
        assert!(combined_records(&tables, Some(-3)).is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = count_ngrams(&[], 2).unwrap();
        assert!(serialize(&table, Some(5)).unwrap().is_empty());
    }

    #[test]
    fn test_combined_keeps_first_seen_order_on_ties() {
        let tokens = owned(&["z", "y", "x", "z", "w"]);
        let tables = count_multiple(&tokens, &[2, 1]).unwrap();
        let rows = rendered(&combined_records(&tables, None).unwrap());
        assert_eq!(
            rows,
            [
                "1\tz\t2",
                "1\ty\t1",
                "1\tx\t1",
                "1\tw\t1",
                "2\tz y\t1",
                "2\ty x\t1",
                "2\tx z\t1",
                "2\tz w\t1",
            ]
        );

        let rows = rendered(&combined_records(&tables, Some(2)).unwrap());
        assert_eq!(rows, ["1\tz\t2", "1\ty\t1", "2\tz y\t1", "2\ty x\t1"]);
    }
}
