use std::f32::consts::PI;
use std::fmt;

/// Closed set of surface functions the grapher can plot.
/// Each maps a grid position (x, z) to a height y; all are total and pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceFunction {
    Cone,
    HyperbolicParaboloid,
    Saddle,
    SinWave,
}

impl SurfaceFunction {
    pub const ALL: [SurfaceFunction; 4] = [
        SurfaceFunction::Cone,
        SurfaceFunction::HyperbolicParaboloid,
        SurfaceFunction::Saddle,
        SurfaceFunction::SinWave,
    ];

    /// Evaluate the function at (x, z).
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        match self {
            SurfaceFunction::Cone => (x * x + z * z).sqrt(),
            SurfaceFunction::HyperbolicParaboloid => x * x - z * z,
            SurfaceFunction::Saddle => x * z,
            SurfaceFunction::SinWave => (x * PI).sin() * (z * PI).cos(),
        }
    }

    /// Resolve a selection tag. Unknown tags fall back to the
    /// hyperbolic paraboloid; that is the documented default, not an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "cone" => SurfaceFunction::Cone,
            "hyperbolicParaboloid" => SurfaceFunction::HyperbolicParaboloid,
            "saddle" => SurfaceFunction::Saddle,
            "sinWave" => SurfaceFunction::SinWave,
            _ => SurfaceFunction::HyperbolicParaboloid,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SurfaceFunction::Cone => "cone",
            SurfaceFunction::HyperbolicParaboloid => "hyperbolicParaboloid",
            SurfaceFunction::Saddle => "saddle",
            SurfaceFunction::SinWave => "sinWave",
        }
    }

    /// Human-readable name for UI listings.
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceFunction::Cone => "Cone",
            SurfaceFunction::HyperbolicParaboloid => "Hyperbolic Paraboloid",
            SurfaceFunction::Saddle => "Saddle",
            SurfaceFunction::SinWave => "Sine Wave",
        }
    }
}

impl Default for SurfaceFunction {
    fn default() -> Self {
        SurfaceFunction::HyperbolicParaboloid
    }
}

impl fmt::Display for SurfaceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [(f32, f32); 7] = [
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (-0.5, 0.25),
        (0.75, -0.75),
        (2.0, 3.0),
        (-1.0, -1.0),
    ];

    #[test]
    fn cone_is_non_negative() {
        for (x, z) in SAMPLES {
            let y = SurfaceFunction::Cone.sample(x, z);
            assert!(y >= 0.0, "cone({x}, {z}) = {y}");
            assert!((y - (x * x + z * z).sqrt()).abs() < 1e-6);
        }
    }

    #[test]
    fn hyperbolic_paraboloid_symmetric_under_negation() {
        for (x, z) in SAMPLES {
            let f = SurfaceFunction::HyperbolicParaboloid;
            assert_eq!(f.sample(x, z), f.sample(-x, -z));
        }
    }

    #[test]
    fn saddle_vanishes_on_axes() {
        for t in [-3.0f32, -0.5, 0.0, 0.5, 3.0] {
            assert_eq!(SurfaceFunction::Saddle.sample(0.0, t), 0.0);
            assert_eq!(SurfaceFunction::Saddle.sample(t, 0.0), 0.0);
        }
    }

    #[test]
    fn sin_wave_stays_in_unit_range() {
        for (x, z) in SAMPLES {
            let y = SurfaceFunction::SinWave.sample(x, z);
            assert!((-1.0..=1.0).contains(&y), "sinWave({x}, {z}) = {y}");
        }
    }

    #[test]
    fn known_tags_resolve() {
        assert_eq!(SurfaceFunction::from_tag("cone"), SurfaceFunction::Cone);
        assert_eq!(
            SurfaceFunction::from_tag("hyperbolicParaboloid"),
            SurfaceFunction::HyperbolicParaboloid
        );
        assert_eq!(SurfaceFunction::from_tag("saddle"), SurfaceFunction::Saddle);
        assert_eq!(SurfaceFunction::from_tag("sinWave"), SurfaceFunction::SinWave);
    }

    #[test]
    fn unknown_tag_defaults_to_hyperbolic_paraboloid() {
        assert_eq!(
            SurfaceFunction::from_tag("torus"),
            SurfaceFunction::HyperbolicParaboloid
        );
        assert_eq!(SurfaceFunction::from_tag(""), SurfaceFunction::default());
    }

    #[test]
    fn tags_round_trip() {
        for f in SurfaceFunction::ALL {
            assert_eq!(SurfaceFunction::from_tag(f.tag()), f);
        }
    }
}
