//! Modal QFL compositions and their normalization.
//!
//! A [`Composition`] is the raw point-count triple (quartz, feldspar, lithics)
//! for one sample. Values are modal percentages but are not required to sum
//! to 100 — everything downstream works on the normalized shares, so the same
//! ratios always classify and plot identically regardless of scale.

pub mod tally;

use crate::error::TerraneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw modal composition of a clastic sample: quartz, feldspar, lithics.
///
/// All components are non-negative. A composition whose total is zero is the
/// "no data" state: it has no normalized form, no classification, and no
/// plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    pub q: f64,
    pub f: f64,
    pub l: f64,
}

impl Composition {
    pub fn new(q: f64, f: f64, l: f64) -> Self {
        Self { q, f, l }
    }

    /// Sum of the three components.
    pub fn total(&self) -> f64 {
        self.q + self.f + self.l
    }

    /// True when there is nothing to classify or plot.
    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    /// Normalized shares summing to 100, or `None` for an empty composition.
    pub fn normalized(&self) -> Option<Normalized> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        Some(Normalized {
            q: self.q / total * 100.0,
            f: self.f / total * 100.0,
            l: self.l / total * 100.0,
        })
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{}Q:{}F:{}L", self.q, self.f, self.l)
    }
}

/// A composition rescaled so q + f + l = 100.
///
/// Only obtainable through [`Composition::normalized`], so a value of this
/// type always represents a real (non-empty) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalized {
    pub q: f64,
    pub f: f64,
    pub l: f64,
}

/// Parse "Q,F,L" (also accepts `/` or `:` separators).
impl FromStr for Composition {
    type Err = TerraneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split([',', '/', ':']).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(TerraneError::InvalidComposition {
                input: s.to_string(),
                reason: format!("expected 3 components, got {}", parts.len()),
            });
        }
        let mut vals = [0.0f64; 3];
        for (i, part) in parts.iter().enumerate() {
            let v: f64 = part.parse().map_err(|_| TerraneError::InvalidComposition {
                input: s.to_string(),
                reason: format!("'{part}' is not a number"),
            })?;
            if !v.is_finite() || v < 0.0 {
                return Err(TerraneError::InvalidComposition {
                    input: s.to_string(),
                    reason: format!("'{part}' must be finite and non-negative"),
                });
            }
            vals[i] = v;
        }
        Ok(Composition::new(vals[0], vals[1], vals[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_sums_to_100() {
        let n = Composition::new(30.0, 20.0, 10.0).normalized().unwrap();
        assert!((n.q + n.f + n.l - 100.0).abs() < 1e-9);
        assert!((n.q - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_has_no_normalized_form() {
        assert!(Composition::new(0.0, 0.0, 0.0).normalized().is_none());
        assert!(Composition::default().is_empty());
    }

    #[test]
    fn test_scale_invariance() {
        let a = Composition::new(12.0, 7.0, 31.0).normalized().unwrap();
        let b = Composition::new(120.0, 70.0, 310.0).normalized().unwrap();
        assert!((a.q - b.q).abs() < 1e-9);
        assert!((a.f - b.f).abs() < 1e-9);
        assert!((a.l - b.l).abs() < 1e-9);
    }

    #[test]
    fn test_parse_separators() {
        for s in ["40,30,30", "40/30/30", "40:30:30", " 40 , 30 , 30 "] {
            let c: Composition = s.parse().unwrap();
            assert_eq!(c, Composition::new(40.0, 30.0, 30.0));
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("40,30".parse::<Composition>().is_err());
        assert!("40,thirty,30".parse::<Composition>().is_err());
        assert!("40,-3,30".parse::<Composition>().is_err());
        assert!("nan,0,0".parse::<Composition>().is_err());
    }
}
