/// Timing curve applied to linear animation time before it reaches a filter.
///
/// The named curves are the standard cubic-Bézier media timing functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `t`.
    Linear,
    /// Bézier `(0.42, 0) (1, 1)`.
    EaseIn,
    /// Bézier `(0, 0) (0.58, 1)`.
    #[default]
    EaseOut,
    /// Bézier `(0.42, 0) (0.58, 1)`.
    EaseInOut,
}

impl Ease {
    /// Control points `(x1, y1, x2, y2)` of the curve.
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Map linear time `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if matches!(self, Self::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_bezier_param(t, x1, x2);
        bezier(s, y1, y2)
    }

    /// Parse a curve name (`linear`, `ease_in`, `ease-out`, `easeInOut`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "linear" => Some(Self::Linear),
            "easein" | "in" => Some(Self::EaseIn),
            "easeout" | "out" => Some(Self::EaseOut),
            "easeinout" | "easeineaseout" | "inout" => Some(Self::EaseInOut),
            _ => None,
        }
    }
}

// One-dimensional cubic Bézier with endpoints 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// x(s) is monotonic for control x values in [0, 1]: Newton first, bisection as fallback.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-9;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPS {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    s = x;
    for _ in 0..64 {
        let v = bezier(s, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
