use std::fmt;

use crate::gram::WordGram;

/// Handler of a pair of a gram and its count. Renders as `"{gram}\t{count}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRecord<'a> {
    pub gram: WordGram<'a>,
    pub count: usize,
}

impl fmt::Display for CountRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.gram, self.count)
    }
}

/// A [`CountRecord`] tagged with its order, as written to a combined file.
/// Renders as `"{n}\t{gram}\t{count}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderedRecord<'a> {
    pub order: usize,
    pub record: CountRecord<'a>,
}

impl fmt::Display for OrderedRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.order, self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let tokens: Vec<String> = vec!["the".into(), "cat".into()];
        let record = CountRecord {
            gram: WordGram::new(&tokens),
            count: 2,
        };
        assert_eq!(record.to_string(), "the cat\t2");

        let ordered = OrderedRecord { order: 2, record };
        assert_eq!(ordered.to_string(), "2\tthe cat\t2");
    }
}
