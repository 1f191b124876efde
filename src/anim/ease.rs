use serde::{Deserialize, Serialize};

/// Easing curve for fades
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    #[default]
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Parse a curve name; accepts `outCubic`, `cubicOut` and d3's `easeCubicOut`
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let key = lower.strip_prefix("ease").unwrap_or(&lower);
        let ease = match key {
            "linear" => Self::Linear,
            "inquad" | "quadin" => Self::InQuad,
            "outquad" | "quadout" => Self::OutQuad,
            "inoutquad" | "quadinout" | "quad" => Self::InOutQuad,
            "incubic" | "cubicin" => Self::InCubic,
            "outcubic" | "cubicout" => Self::OutCubic,
            "inoutcubic" | "cubicinout" | "cubic" => Self::InOutCubic,
            _ => return None,
        };
        Some(ease)
    }
}
