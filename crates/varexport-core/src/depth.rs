//! Depth bound for exports.

use std::fmt;
use std::str::FromStr;

use crate::error::{ExportError, Result};

/// How many levels of containers and records are expanded.
///
/// `Limited(n)` expands the root plus `n - 1` levels below it; the next level
/// is printed in its truncated `(...)` form. `Limited(0)` truncates the root
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxDepth {
    #[default]
    Unbounded,
    Limited(usize),
}

impl MaxDepth {
    /// Remaining expansion budget handed to the root. The root consumes one
    /// unit before deciding whether to expand, so the budget starts one above
    /// the requested depth.
    pub(crate) fn initial_budget(self) -> Option<usize> {
        match self {
            MaxDepth::Unbounded => None,
            MaxDepth::Limited(n) => Some(n.saturating_add(1)),
        }
    }
}

/// `-1` is the unbounded sentinel; anything lower is rejected.
impl TryFrom<i64> for MaxDepth {
    type Error = ExportError;

    fn try_from(n: i64) -> Result<Self> {
        match n {
            -1 => Ok(MaxDepth::Unbounded),
            n if n >= 0 => Ok(MaxDepth::Limited(usize::try_from(n).unwrap_or(usize::MAX))),
            n => Err(ExportError::InvalidDepth(n)),
        }
    }
}

impl From<usize> for MaxDepth {
    fn from(n: usize) -> Self {
        MaxDepth::Limited(n)
    }
}

impl FromStr for MaxDepth {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(MaxDepth::Unbounded);
        }
        let n: i64 = s
            .parse()
            .map_err(|_| ExportError::UnparsableDepth(s.to_string()))?;
        MaxDepth::try_from(n)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Unbounded => f.write_str("unbounded"),
            MaxDepth::Limited(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_maps_to_unbounded() {
        assert_eq!(MaxDepth::try_from(-1i64).unwrap(), MaxDepth::Unbounded);
    }

    #[test]
    fn below_sentinel_is_rejected() {
        let err = MaxDepth::try_from(-2i64).unwrap_err();
        assert!(matches!(err, ExportError::InvalidDepth(-2)));
    }

    #[test]
    fn parses_from_text() {
        assert_eq!("unbounded".parse::<MaxDepth>().unwrap(), MaxDepth::Unbounded);
        assert_eq!("-1".parse::<MaxDepth>().unwrap(), MaxDepth::Unbounded);
        assert_eq!(" 3 ".parse::<MaxDepth>().unwrap(), MaxDepth::Limited(3));
        assert!(matches!(
            "deep".parse::<MaxDepth>(),
            Err(ExportError::UnparsableDepth(_))
        ));
        assert!(matches!(
            "-5".parse::<MaxDepth>(),
            Err(ExportError::InvalidDepth(-5))
        ));
    }

    #[test]
    fn budget_is_one_above_requested_depth() {
        assert_eq!(MaxDepth::Unbounded.initial_budget(), None);
        assert_eq!(MaxDepth::Limited(0).initial_budget(), Some(1));
        assert_eq!(MaxDepth::Limited(usize::MAX).initial_budget(), Some(usize::MAX));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for d in [MaxDepth::Unbounded, MaxDepth::Limited(0), MaxDepth::Limited(7)] {
            assert_eq!(d.to_string().parse::<MaxDepth>().unwrap(), d);
        }
    }
}
