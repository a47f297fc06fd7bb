//! Three-valued eligibility outcome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome of one program against one household, and the color of one graph edge.
///
/// # Example
///
/// ```
/// use benefitgraph_core::Verdict;
///
/// let v: Verdict = "indeterminate".parse().unwrap();
/// assert_eq!(v, Verdict::Indeterminate);
/// assert_eq!(Verdict::Pass.to_string(), "pass");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// A fully confirmed qualifying path exists.
    Pass,
    /// No qualifying path exists even if unknown data resolves favorably.
    Fail,
    /// A qualifying path might exist pending unknown information.
    Indeterminate,
}

impl Verdict {
    /// All verdicts, in declaration order.
    pub const ALL: [Verdict; 3] = [Verdict::Pass, Verdict::Fail, Verdict::Indeterminate];

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
            Verdict::Indeterminate => "indeterminate",
        }
    }

    /// Maps a definite boolean outcome to pass/fail.
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a verdict label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown verdict `{0}` (expected pass, fail or indeterminate)")]
pub struct ParseVerdictError(pub String);

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(Verdict::Pass),
            "fail" => Ok(Verdict::Fail),
            "indeterminate" => Ok(Verdict::Indeterminate),
            other => Err(ParseVerdictError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_labels() {
        for v in Verdict::ALL {
            assert_eq!(v.as_str().parse::<Verdict>().unwrap(), v);
        }
        assert!("maybe".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Verdict::Indeterminate).unwrap();
        assert_eq!(json, "\"indeterminate\"");
    }
}
