//! Static presentation tables keyed by enumerated tags.
//!
//! One shared lookup per tag type replaces the per-component string switches
//! the host UI used to carry, so labels and colors cannot drift between
//! components.

use serde::{Deserialize, Serialize};

use super::MetricId;

/// Presentation attributes for one metric tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDisplay {
    pub label: &'static str,
    pub icon: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
}

pub(super) const fn metric_display(metric: MetricId) -> &'static MetricDisplay {
    match metric {
        MetricId::Hydration => &MetricDisplay {
            label: "HYDRATION",
            icon: "\u{1F4A7}",
            unit: "%",
            color: "#6366F1",
        },
        MetricId::Impedance => &MetricDisplay {
            label: "IMPEDANCE",
            icon: "\u{26A1}",
            unit: "\u{3A9}",
            color: "#8B5CF6",
        },
        MetricId::SkinTemp => &MetricDisplay {
            label: "SKIN TEMP",
            icon: "\u{1F321}\u{FE0F}",
            unit: "\u{B0}C",
            color: "#F59E0B",
        },
        // The heart-rate tab renders icon-only in the host UI.
        MetricId::HeartRate => &MetricDisplay {
            label: "",
            icon: "\u{2764}\u{FE0F}",
            unit: "bpm",
            color: "#EC4899",
        },
    }
}

/// Severity of a hydration alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// Presentation attributes for one alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityDisplay {
    pub label: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

impl AlertSeverity {
    #[must_use]
    pub const fn display(self) -> &'static SeverityDisplay {
        match self {
            Self::Info => &SeverityDisplay {
                label: "INFORMATION",
                color: "#3B82F6",
                background: "#EFF6FF",
            },
            Self::Warning => &SeverityDisplay {
                label: "DEHYDRATION WARNING",
                color: "#D97706",
                background: "#FFFBEB",
            },
            Self::Critical => &SeverityDisplay {
                label: "CRITICAL ALERT",
                color: "#DC2626",
                background: "#FEF2F2",
            },
        }
    }
}

/// Legend bucket for a weekly performance bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarStatus {
    Optimal,
    SubOptimal,
}

impl BarStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "OPTIMAL",
            Self::SubOptimal => "SUB-OPTIMAL",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Optimal => "#6366F1",
            Self::SubOptimal => "#FBBF24",
        }
    }
}
