use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// A timing function in the classic `(t, b, c, d)` form.
///
/// - `t`: elapsed time (ms)
/// - `b`: start value
/// - `c`: total change (`end - start`)
/// - `d`: total duration (ms)
///
/// Returns the eased position at `t`. Implementations are pure.
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// Named easing curves available for snapping.
///
/// The string forms (`"easeInOutQuad"`, `"easeInCubic"`, `"inOutQuintic"`) are accepted by
/// `FromStr` and produced by `Display`, so adapters can pass form/attribute values through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasingPreset {
    #[default]
    EaseInOutQuad,
    EaseInCubic,
    InOutQuintic,
}

impl EasingPreset {
    pub const ALL: [EasingPreset; 3] = [Self::EaseInOutQuad, Self::EaseInCubic, Self::InOutQuintic];

    /// Resolves the preset to its timing function.
    pub fn function(self) -> EasingFn {
        match self {
            Self::EaseInOutQuad => ease_in_out_quad,
            Self::EaseInCubic => ease_in_cubic,
            Self::InOutQuintic => in_out_quintic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::InOutQuintic => "inOutQuintic",
        }
    }
}

impl fmt::Display for EasingPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown easing preset name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing preset `{name}`")]
pub struct ParseEasingError {
    pub name: String,
}

impl FromStr for EasingPreset {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParseEasingError {
                name: s.to_string(),
            })
    }
}

pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

pub fn ease_in_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

pub fn in_out_quintic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    let ts = t * t;
    let tc = ts * t;
    b + c * (6.0 * tc * ts - 15.0 * ts * ts + 10.0 * tc)
}
