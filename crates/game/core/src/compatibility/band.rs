/// Display banding of a compatibility score.
///
/// Derived from the numeric score for presentation only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CompatibilityBand {
    VeryFavorable,
    Favorable,
    Neutral,
    Unfavorable,
    VeryUnfavorable,
}

impl CompatibilityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 1.3 {
            Self::VeryFavorable
        } else if score >= 1.1 {
            Self::Favorable
        } else if score >= 0.9 {
            Self::Neutral
        } else if score >= 0.7 {
            Self::Unfavorable
        } else {
            Self::VeryUnfavorable
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryFavorable => "very favorable",
            Self::Favorable => "favorable",
            Self::Neutral => "neutral",
            Self::Unfavorable => "unfavorable",
            Self::VeryUnfavorable => "very unfavorable",
        }
    }
}
