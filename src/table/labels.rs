//! Named mu families.

use crate::error::HarmonicError;
use crate::rational::{integer, ratio, Rational};
use std::fmt;
use std::str::FromStr;

/// A mu value defined as a function of `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MuLabel {
    /// `1`.
    One,
    /// `k/(k-1)`, defined for `k >= 2`.
    Lee,
    /// `k/(k-2)`, defined for `k >= 3`.
    Capr,
    /// `k^2/(k^2-k-1)`, defined for `k >= 2`.
    Eku,
}

impl MuLabel {
    pub const ALL: [MuLabel; 4] = [MuLabel::One, MuLabel::Lee, MuLabel::Capr, MuLabel::Eku];

    /// Lowercase identifier, as used in CSV headers and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            MuLabel::One => "one",
            MuLabel::Lee => "lee",
            MuLabel::Capr => "capr",
            MuLabel::Eku => "eku",
        }
    }

    /// Column heading for TeX output.
    pub fn tex_label(self) -> &'static str {
        match self {
            MuLabel::One => "$1$",
            MuLabel::Lee => "$k/(k-1)$",
            MuLabel::Capr => "$k/(k-2)$",
            MuLabel::Eku => "$k^2/(k^2-k-1)$",
        }
    }

    /// The mu value at `k`, or `None` where the family is undefined.
    pub fn mu(self, k: usize) -> Option<Rational> {
        let k = k as i64;
        match self {
            MuLabel::One => Some(integer(1)),
            MuLabel::Lee if k >= 2 => Some(ratio(k, k - 1)),
            MuLabel::Capr if k >= 3 => Some(ratio(k, k - 2)),
            MuLabel::Eku if k >= 2 => Some(ratio(k * k, k * k - k - 1)),
            _ => None,
        }
    }
}

impl fmt::Display for MuLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MuLabel {
    type Err = HarmonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuLabel::ALL
            .into_iter()
            .find(|label| label.name() == s.trim())
            .ok_or_else(|| HarmonicError::UnknownLabel {
                label: s.to_string(),
            })
    }
}
