//! Numeric range expressions used to pick a pluralized variant.
//!
//! The grammar is deliberately tiny:
//!
//! - `"1,2"` is the range `[1, 2]`
//! - `"1,"` is `[1, +inf]`
//! - `",1"` is `[-inf, 1]`
//! - `",!1"` is `[-inf, 1[`
//! - `"1"` is `[1, 1]`
//!
//! A bound prefixed with `!` is exclusive. Bounds are base-10 integers.

use std::str::FromStr;

use crate::error::Error;

/// One end of a [`RangeExpr`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub value: f64,
    pub exclusive: bool,
}

impl Bound {
    /// Open lower end, `-inf` inclusive.
    pub const UNBOUNDED_BELOW: Bound = Bound {
        value: f64::NEG_INFINITY,
        exclusive: false,
    };

    /// Open upper end, `+inf` inclusive.
    pub const UNBOUNDED_ABOVE: Bound = Bound {
        value: f64::INFINITY,
        exclusive: false,
    };
}

/// A parsed range expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeExpr {
    pub lower: Bound,
    pub upper: Bound,
}

impl RangeExpr {
    /// Returns `true` when `n` lies between both bounds.
    pub fn contains(&self, n: f64) -> bool {
        let above_lower = if self.lower.exclusive {
            self.lower.value < n
        } else {
            self.lower.value <= n
        };
        let below_upper = if self.upper.exclusive {
            n < self.upper.value
        } else {
            n <= self.upper.value
        };
        above_lower && below_upper
    }
}

impl FromStr for RangeExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRange(s.to_string());

        if s.is_empty() {
            return Err(invalid());
        }

        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [single] => {
                let bound = parse_bound(single).ok_or_else(invalid)?;
                Ok(RangeExpr {
                    lower: bound,
                    upper: bound,
                })
            }
            [lower, upper] => {
                let lower = if lower.is_empty() {
                    Bound::UNBOUNDED_BELOW
                } else {
                    parse_bound(lower).ok_or_else(invalid)?
                };
                let upper = if upper.is_empty() {
                    Bound::UNBOUNDED_ABOVE
                } else {
                    parse_bound(upper).ok_or_else(invalid)?
                };
                Ok(RangeExpr { lower, upper })
            }
            _ => Err(invalid()),
        }
    }
}

// A `!` alone is not an open bound: there is nothing left to parse.
fn parse_bound(part: &str) -> Option<Bound> {
    let (exclusive, digits) = match part.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, part),
    };
    let value = digits.trim().parse::<i64>().ok()?;
    Some(Bound {
        value: value as f64,
        exclusive,
    })
}

/// Tests whether `n` falls inside `range`.
///
/// Malformed expressions never match.
pub fn is_in_range(range: &str, n: f64) -> bool {
    range
        .parse::<RangeExpr>()
        .map(|expr| expr.contains(n))
        .unwrap_or(false)
}
