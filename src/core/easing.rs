//! Easing curves: map normalised progress `[0, 1]` onto animation value `[0, 1]`.
//!
//! Every named curve satisfies `f(0) == 0` and `f(1) == 1`, which is what lets
//! an eased run land exactly on its target.  [`Easing::Custom`] is trusted to
//! do the same.

use serde::{Deserialize, Serialize};

/// Easing curve applied to an eased scroll run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// `1 - (1-t)^4`: fast start, long deceleration.
    #[default]
    EaseOutQuart,
    Linear,
    /// `1 - (1-t)^3`
    EaseOutCubic,
    /// `1 - (1-t)^5`
    EaseOutQuint,
    /// `1 - 2^(-10t)`, snapped to 1 at the end.
    EaseOutExpo,
    EaseInOutCubic,
    /// Caller-supplied curve.  Cannot be written to a config file.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Custom(a), Easing::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Easing {
    /// Every curve that can be named in config or on the command line.
    pub const NAMED: &[Easing] = &[
        Easing::EaseOutQuart,
        Easing::Linear,
        Easing::EaseOutCubic,
        Easing::EaseOutQuint,
        Easing::EaseOutExpo,
        Easing::EaseInOutCubic,
    ];

    /// Apply the curve.  Named curves clamp `t` into `[0, 1]` first; a custom
    /// curve receives `t` untouched.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let c = t.clamp(0.0, 1.0);
        match *self {
            Easing::Custom(f) => f(t),
            Easing::EaseOutQuart => ease_out_quart(c),
            Easing::Linear => c,
            Easing::EaseOutCubic => {
                let inv = 1.0 - c;
                1.0 - inv * inv * inv
            }
            Easing::EaseOutQuint => {
                let inv = 1.0 - c;
                1.0 - inv * inv * inv * inv * inv
            }
            Easing::EaseOutExpo => {
                if c >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * c)
                }
            }
            Easing::EaseInOutCubic => {
                if c < 0.5 {
                    4.0 * c * c * c
                } else {
                    let k = -2.0 * c + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
        }
    }

    /// Name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Easing::EaseOutQuart => "ease_out_quart",
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "ease_out_cubic",
            Easing::EaseOutQuint => "ease_out_quint",
            Easing::EaseOutExpo => "ease_out_expo",
            Easing::EaseInOutCubic => "ease_in_out_cubic",
            Easing::Custom(_) => "custom",
        }
    }

    /// Look up a named curve.  Accepts `-` in place of `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase().replace('-', "_");
        Self::NAMED.iter().copied().find(|e| e.name() == wanted)
    }
}

/// Quartic ease-out: `f(t) = 1 - (1-t)^4`.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}
