//! Risk meter presentation
//!
//! Maps an aggregate risk percentage to one of eight [`RiskBand`]s and to a
//! needle position on a half-circle gauge. Classification always uses the raw
//! value; only the gauge clamps.

use crate::config::GaugeConfig;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Discrete risk class, ordered from safest to riskiest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// `risk <= -20`
    VeryLow,
    /// `-20 < risk <= -10`
    Low,
    /// `-10 < risk < 0`
    Reduced,
    /// `risk == 0`
    Neutral,
    /// `0 < risk <= 10`
    Slight,
    /// `10 < risk <= 25`
    Moderate,
    /// `25 < risk <= 40`
    High,
    /// `risk > 40`
    VeryHigh,
}

impl RiskBand {
    /// All bands, safest first
    pub const ALL: [RiskBand; 8] = [
        RiskBand::VeryLow,
        RiskBand::Low,
        RiskBand::Reduced,
        RiskBand::Neutral,
        RiskBand::Slight,
        RiskBand::Moderate,
        RiskBand::High,
        RiskBand::VeryHigh,
    ];

    /// Classify an unclamped risk percentage
    #[must_use]
    pub const fn classify(risk: i64) -> Self {
        if risk <= -20 {
            Self::VeryLow
        } else if risk <= -10 {
            Self::Low
        } else if risk < 0 {
            Self::Reduced
        } else if risk == 0 {
            Self::Neutral
        } else if risk <= 10 {
            Self::Slight
        } else if risk <= 25 {
            Self::Moderate
        } else if risk <= 40 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low Risk",
            Self::Low => "Low Risk",
            Self::Reduced => "Reduced Risk",
            Self::Neutral => "Neutral",
            Self::Slight => "Slight Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }

    /// Display color as `#rrggbb`
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryLow => "#10b981",
            Self::Low => "#34d399",
            Self::Reduced => "#6ee7b7",
            Self::Neutral => "#94a3b8",
            Self::Slight => "#fbbf24",
            Self::Moderate => "#f59e0b",
            Self::High => "#f97316",
            Self::VeryHigh => "#ef4444",
        }
    }

    /// Indicator glyph
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::VeryLow => "🌟",
            Self::Low => "✅",
            Self::Reduced => "👍",
            Self::Neutral => "➖",
            Self::Slight => "⚡",
            Self::Moderate => "⚠️",
            Self::High => "🔶",
            Self::VeryHigh => "🚨",
        }
    }
}

impl Display for RiskBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Needle position on the half-circle gauge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Value after clamping to the gauge bounds
    pub clamped: i64,
    /// Position in `[0, 1]` from the low end
    pub fill: f64,
    /// Needle angle in degrees, `-90` (low end) to `+90` (high end)
    pub angle_degrees: f64,
}

impl Gauge {
    /// Clamp and position a raw risk value
    ///
    /// Bounds with `min >= max` fall back to the default `[-50, 50]`.
    #[must_use]
    pub fn position(risk: i64, bounds: GaugeConfig) -> Self {
        let bounds = if bounds.min < bounds.max {
            bounds
        } else {
            GaugeConfig::default()
        };
        let clamped = risk.clamp(bounds.min, bounds.max);
        #[allow(clippy::cast_precision_loss)]
        let fill = (clamped as f64 - bounds.min as f64) / (bounds.max as f64 - bounds.min as f64);
        Self {
            clamped,
            fill,
            angle_degrees: fill * 180.0 - 90.0,
        }
    }
}

/// Full meter reading for one risk value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMeter {
    /// Raw aggregate risk
    pub risk: i64,
    /// Band of the raw value
    pub band: RiskBand,
    /// Clamped needle position
    pub gauge: Gauge,
}

impl RiskMeter {
    /// Read the meter for a raw value
    #[must_use]
    pub fn read(risk: i64, bounds: GaugeConfig) -> Self {
        Self {
            risk,
            band: RiskBand::classify(risk),
            gauge: Gauge::position(risk, bounds),
        }
    }
}
