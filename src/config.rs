// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration: the required set, rank window, and sample interval.
//!
//! All validation happens here, before any generation begins. A value of
//! these types that exists is valid; the orchestrator and generator never
//! re-check.
//!
//! The required-numbers list format matches the original configuration
//! surface: integers separated by commas, spaces, or semicolons, e.g.
//! `"1,2"`, `"3 7 21"`, `"4;5;6"`. An absent or blank list means the
//! default `{1, 2}`.

use crate::constants::{DEFAULT_REQUIRED, DEFAULT_SAMPLE_INTERVAL, PICK_SIZE, UNIVERSE_SIZE};
use crate::error::{Error, Result};

/// The numbers pinned into every generated combination.
///
/// Invariants (checked at construction): every value in `1..=25`, no
/// duplicates, at most [`PICK_SIZE`] values. Stored sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredSet {
    values: Vec<u8>,
}

impl RequiredSet {
    /// Validate and build a required set from arbitrary integers.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self> {
        let mut checked: Vec<u8> = Vec::new();
        for value in values {
            if value < 1 || value > UNIVERSE_SIZE as i64 {
                return Err(Error::RequiredOutOfRange { value });
            }
            let value = value as u8;
            if checked.contains(&value) {
                return Err(Error::DuplicateRequired { value });
            }
            checked.push(value);
        }
        if checked.len() > PICK_SIZE {
            return Err(Error::TooManyRequired {
                len: checked.len(),
            });
        }
        checked.sort_unstable();
        Ok(Self { values: checked })
    }

    /// Parse a delimited list (commas, spaces, or semicolons). `None` or a
    /// blank string yields the default `{1, 2}`.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Self::new(DEFAULT_REQUIRED.iter().map(|&v| v as i64)),
        };
        let mut values = Vec::new();
        for token in raw.split([',', ' ', ';']).filter(|t| !t.trim().is_empty()) {
            let value: i64 = token.trim().parse().map_err(|_| Error::UnparseableNumber {
                token: token.trim().to_string(),
            })?;
            values.push(value);
        }
        Self::new(values)
    }

    /// An empty required set (every combination is free).
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: u8) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// The pinned numbers, sorted ascending.
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    /// How many numbers remain to be drawn from the free pool.
    pub fn k_free(&self) -> usize {
        PICK_SIZE - self.values.len()
    }

    /// Universe minus the required numbers, ascending.
    pub fn free_pool(&self) -> Vec<u8> {
        (1..=UNIVERSE_SIZE as u8)
            .filter(|v| !self.contains(*v))
            .collect()
    }
}

impl Default for RequiredSet {
    /// The default required set `{1, 2}`.
    fn default() -> Self {
        Self {
            values: DEFAULT_REQUIRED.to_vec(),
        }
    }
}

/// A contiguous range of 1-based positions in generation order to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWindow {
    start: u64,
    count: u64,
}

impl RankWindow {
    /// Validate and build a window. `start` is 1-based.
    pub fn new(start: u64, count: u64) -> Result<Self> {
        if start < 1 {
            return Err(Error::WindowStartTooSmall);
        }
        if count == 0 {
            return Err(Error::WindowCountZero);
        }
        Ok(Self { start, count })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Last surfaced position, inclusive.
    pub fn end(&self) -> u64 {
        self.start + self.count - 1
    }

    /// Whether the 1-based position falls inside the window.
    pub fn contains(&self, position: u64) -> bool {
        position >= self.start && position <= self.end()
    }
}

/// Everything a run needs: the required set, an optional rank window, and
/// the instrumentation sample interval.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub required: RequiredSet,
    pub window: Option<RankWindow>,
    pub sample_interval: u64,
}

impl RunConfig {
    pub fn new(
        required: RequiredSet,
        window: Option<RankWindow>,
        sample_interval: u64,
    ) -> Result<Self> {
        if sample_interval == 0 {
            return Err(Error::SampleIntervalZero);
        }
        Ok(Self {
            required,
            window,
            sample_interval,
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            required: RequiredSet::default(),
            window: None,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_sorts_and_validates() {
        let set = RequiredSet::new([7, 3, 21]).unwrap();
        assert_eq!(set.as_slice(), &[3, 7, 21]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.k_free(), 12);
    }

    #[test]
    fn test_out_of_range_rejected() {
        for value in [0i64, 26, -3, 100] {
            let err = RequiredSet::new([value]).unwrap_err();
            assert_eq!(err, Error::RequiredOutOfRange { value });
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = RequiredSet::new([1, 2, 1]).unwrap_err();
        assert_eq!(err, Error::DuplicateRequired { value: 1 });
    }

    #[test]
    fn test_sixteen_values_rejected() {
        let err = RequiredSet::new((1..=16).collect::<Vec<i64>>()).unwrap_err();
        assert_eq!(err, Error::TooManyRequired { len: 16 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_fifteen_values_accepted() {
        let set = RequiredSet::new((1..=15).collect::<Vec<i64>>()).unwrap();
        assert_eq!(set.len(), 15);
        assert_eq!(set.k_free(), 0);
    }

    #[test]
    fn test_parse_delimiters() {
        for raw in ["3,7,21", "3 7 21", "3;7;21", " 3 , 7 ; 21 "] {
            let set = RequiredSet::parse(Some(raw)).unwrap();
            assert_eq!(set.as_slice(), &[3, 7, 21], "raw={raw:?}");
        }
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(RequiredSet::parse(None).unwrap().as_slice(), &[1, 2]);
        assert_eq!(RequiredSet::parse(Some("")).unwrap().as_slice(), &[1, 2]);
        assert_eq!(RequiredSet::parse(Some("  ")).unwrap().as_slice(), &[1, 2]);
    }

    #[test]
    fn test_parse_bad_token() {
        let err = RequiredSet::parse(Some("1,two,3")).unwrap_err();
        assert_eq!(
            err,
            Error::UnparseableNumber {
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn test_free_pool_is_complement() {
        let set = RequiredSet::new([1, 2]).unwrap();
        let pool = set.free_pool();
        assert_eq!(pool.len(), 23);
        assert_eq!(pool.first(), Some(&3));
        assert_eq!(pool.last(), Some(&25));
        assert!(pool.iter().all(|v| !set.contains(*v)));

        let empty = RequiredSet::empty();
        assert_eq!(empty.free_pool().len(), 25);
    }

    #[test]
    fn test_window_validation() {
        let win = RankWindow::new(10, 5).unwrap();
        assert_eq!(win.end(), 14);
        assert!(win.contains(10));
        assert!(win.contains(14));
        assert!(!win.contains(9));
        assert!(!win.contains(15));

        assert_eq!(
            RankWindow::new(0, 5).unwrap_err(),
            Error::WindowStartTooSmall
        );
        assert_eq!(RankWindow::new(1, 0).unwrap_err(), Error::WindowCountZero);
    }

    #[test]
    fn test_config_rejects_zero_interval() {
        let err = RunConfig::new(RequiredSet::default(), None, 0).unwrap_err();
        assert_eq!(err, Error::SampleIntervalZero);
    }

    #[test]
    fn test_config_default() {
        let config = RunConfig::default();
        assert_eq!(config.required.as_slice(), &[1, 2]);
        assert!(config.window.is_none());
        assert_eq!(config.sample_interval, 10_000);
    }
}
