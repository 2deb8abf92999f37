//! Ticker input handling.
//!
//! Tickers can come from command-line values, text files and CSV columns.
//! [`TickerList`] gathers them in arrival order and cleans them up in one
//! place before any lookup happens.

mod sources;

pub use sources::{load_tickers_from_csv, load_tickers_from_file};

use crate::error::InputError;
use std::collections::HashSet;

/// Split comma-separated text into trimmed, non-empty tickers.
pub fn split_tickers(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cleanup applied by [`TickerList::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerOptions {
    /// Upper-case every ticker.
    pub uppercase: bool,
    /// Drop repeated tickers, keeping the first occurrence.
    pub dedup: bool,
}

impl Default for TickerOptions {
    fn default() -> Self {
        Self {
            uppercase: false,
            dedup: true,
        }
    }
}

/// Tickers gathered from one or more inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerList {
    raw: Vec<String>,
}

impl TickerList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tickers, in order.
    pub fn extend<I, T>(&mut self, tickers: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.raw.extend(tickers.into_iter().map(Into::into));
    }

    /// Trim, drop empties, apply `options` and return the final list.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoTickers`] if no ticker survives cleanup.
    pub fn finish(self, options: TickerOptions) -> Result<Vec<String>, InputError> {
        let mut seen = HashSet::new();
        let tickers: Vec<String> = self
            .raw
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(|t| if options.uppercase { t.to_uppercase() } else { t })
            .filter(|t| !options.dedup || seen.insert(t.clone()))
            .collect();

        if tickers.is_empty() {
            return Err(InputError::NoTickers);
        }
        Ok(tickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("GARAN.IS, AKBNK.IS, TUPRS.IS", vec!["GARAN.IS", "AKBNK.IS", "TUPRS.IS"])]
    #[case("GARAN.IS,,  ,AKBNK.IS,", vec!["GARAN.IS", "AKBNK.IS"])]
    #[case("  ", vec![])]
    #[case("EREGL.IS", vec!["EREGL.IS"])]
    fn test_split_tickers(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_tickers(input), expected);
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let mut list = TickerList::new();
        list.extend(["GARAN.IS", "GARAN.IS", "AKBNK.IS"]);

        let tickers = list.finish(TickerOptions::default()).unwrap();
        assert_eq!(tickers, vec!["GARAN.IS", "AKBNK.IS"]);
    }

    #[test]
    fn test_trims_and_drops_empty() {
        let mut list = TickerList::new();
        list.extend([" GARAN.IS ", "", "   ", "AKBNK.IS\t"]);

        let tickers = list.finish(TickerOptions::default()).unwrap();
        assert_eq!(tickers, vec!["GARAN.IS", "AKBNK.IS"]);
    }

    #[test]
    fn test_keep_duplicates() {
        let mut list = TickerList::new();
        list.extend(["A", "B", "A"]);

        let options = TickerOptions {
            dedup: false,
            ..TickerOptions::default()
        };
        assert_eq!(list.finish(options).unwrap(), vec!["A", "B", "A"]);
    }

    #[test]
    fn test_uppercase_before_dedup() {
        let mut list = TickerList::new();
        list.extend(["garan.is", "GARAN.IS", "akbnk.is"]);

        let options = TickerOptions {
            uppercase: true,
            dedup: true,
        };
        assert_eq!(list.finish(options).unwrap(), vec!["GARAN.IS", "AKBNK.IS"]);
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let mut list = TickerList::new();
        list.extend([" ", ""]);

        assert!(matches!(
            list.finish(TickerOptions::default()),
            Err(InputError::NoTickers)
        ));
    }
}
