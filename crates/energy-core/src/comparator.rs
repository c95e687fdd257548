//! Measured-versus-allowance comparison shared by every rule set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the allowance below which a pass is flagged as marginal.
const MARGINAL_PERCENT: f64 = 5.0;

/// Pass/fail outcome with the distance to the boundary, as a percentage of
/// the allowance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    /// Passed with less than five percent headroom. Carries the remaining
    /// margin, rounded to two decimals.
    MarginalPass(f64),
    /// Carries the overshoot as a percentage of the allowance, rounded to
    /// two decimals.
    Fail(f64),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        !matches!(self, Verdict::Fail(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::MarginalPass(margin) => write!(f, "marginally PASS ({}% to fail)", margin),
            Verdict::Fail(excess) => write!(f, "FAIL ({}% to pass)", excess),
        }
    }
}

/// A measured value held against its allowance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub measured: f64,
    pub allowance: f64,
    pub verdict: Verdict,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compare a measured value against its allowance. Equality passes. The
/// marginal cutoff is applied to the unrounded margin, so a raw margin of
/// 4.999 is marginal even though it renders as 5%.
pub fn compare(measured: f64, allowance: f64) -> Comparison {
    let verdict = if measured <= allowance {
        let margin = (allowance - measured) * 100.0 / allowance;
        if margin < MARGINAL_PERCENT {
            Verdict::MarginalPass(round2(margin))
        } else {
            Verdict::Pass
        }
    } else {
        Verdict::Fail(round2((measured - allowance) * 100.0 / allowance))
    };
    Comparison {
        measured,
        allowance,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_pass() {
        let c = compare(10.0, 10.0);
        assert_eq!(c.verdict, Verdict::MarginalPass(0.0));
        assert!(c.verdict.is_pass());
    }

    #[test]
    fn comfortable_pass() {
        let c = compare(33.0252, 41.6);
        assert_eq!(c.verdict, Verdict::Pass);
    }

    #[test]
    fn marginal_boundary_uses_raw_margin() {
        // 0.951 of the allowance leaves 4.9% headroom, inside the band.
        let c = compare(0.951, 1.0);
        assert_eq!(c.verdict, Verdict::MarginalPass(4.9));
        // 0.94 leaves 6%, a plain pass.
        let c = compare(0.94, 1.0);
        assert_eq!(c.verdict, Verdict::Pass);
        // Exactly 5% headroom is not marginal.
        let c = compare(0.95, 1.0);
        assert_eq!(c.verdict, Verdict::Pass);
    }

    #[test]
    fn fail_reports_overshoot() {
        let c = compare(40.6902, 38.998);
        match c.verdict {
            Verdict::Fail(excess) => assert_eq!(excess, 4.34),
            other => panic!("expected Fail, got {:?}", other),
        }
        assert!(!c.verdict.is_pass());
    }

    #[test]
    fn display_strings() {
        assert_eq!(compare(10.0, 20.0).verdict.to_string(), "PASS");
        assert_eq!(
            compare(0.951, 1.0).verdict.to_string(),
            "marginally PASS (4.9% to fail)"
        );
        assert_eq!(compare(2.0, 1.0).verdict.to_string(), "FAIL (100% to pass)");
    }
}
