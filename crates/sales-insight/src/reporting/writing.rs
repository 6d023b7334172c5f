//! Plain-language interpretation of the moments.

use crate::analysis::Moments;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a distribution's asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkewnessShape {
    RightSkewed,
    LeftSkewed,
    Symmetrical,
}

impl SkewnessShape {
    /// Classify by sign. Exactly zero, and NaN, count as symmetrical.
    pub fn classify(skewness: f64) -> Self {
        if skewness > 0.0 {
            Self::RightSkewed
        } else if skewness < 0.0 {
            Self::LeftSkewed
        } else {
            Self::Symmetrical
        }
    }
}

impl fmt::Display for SkewnessShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::RightSkewed => "right-skewed",
            Self::LeftSkewed => "left-skewed",
            Self::Symmetrical => "symmetrical",
        };
        f.write_str(text)
    }
}

/// Tail weight relative to a normal distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KurtosisShape {
    Leptokurtic,
    Platykurtic,
    Mesokurtic,
}

impl KurtosisShape {
    /// Classify excess kurtosis by sign. Exactly zero, and NaN, count as
    /// mesokurtic.
    pub fn classify(excess_kurtosis: f64) -> Self {
        if excess_kurtosis > 0.0 {
            Self::Leptokurtic
        } else if excess_kurtosis < 0.0 {
            Self::Platykurtic
        } else {
            Self::Mesokurtic
        }
    }
}

impl fmt::Display for KurtosisShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Leptokurtic => "leptokurtic",
            Self::Platykurtic => "platykurtic",
            Self::Mesokurtic => "mesokurtic",
        };
        f.write_str(text)
    }
}

/// The three-line interpretation of `moments` for `column`.
pub fn render_sentence(moments: &Moments, column: &str) -> String {
    format!(
        "For the attribute '{}':\n\
         Mean = {:.2}, Standard Deviation = {:.2}, Skewness = {:.2}, and Excess Kurtosis = {:.2}.\n\
         The data is {} and {}.",
        column,
        moments.mean,
        moments.std_dev,
        moments.skewness,
        moments.excess_kurtosis,
        SkewnessShape::classify(moments.skewness),
        KurtosisShape::classify(moments.excess_kurtosis),
    )
}

/// Print the interpretation to stdout, preceded by a blank line.
pub fn writing(moments: &Moments, column: &str) {
    println!("\n{}", render_sentence(moments, column));
}
