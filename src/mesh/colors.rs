//! Elevation-to-color mapping

use crate::error::{PlanetError, Result};

/// RGBA color type, channels in `[0, 1]`
pub type Color = [f32; 4];

/// Trait for mapping a scalar (elevation) to a color
pub trait ColorMapper {
    /// Map `value` to an RGBA color
    fn color_at(&self, value: f32) -> Color;
}

/// One control point of a [`ColorGradient`]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Scalar position of this stop
    pub key: f32,
    /// Color at `key`
    pub color: Color,
}

impl GradientStop {
    /// Create a stop from a float color
    pub fn new(key: f32, color: Color) -> Self {
        Self { key, color }
    }

    /// Create an opaque stop from 8-bit channels
    pub fn rgb8(key: f32, r: u8, g: u8, b: u8) -> Self {
        Self::new(
            key,
            [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0],
        )
    }
}

/// Piecewise-linear color gradient over scalar keys
///
/// Keys are strictly increasing. Values outside the key range clamp to the
/// first or last color; values between two keys blend their colors linearly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "GradientStops", into = "GradientStops")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    stops: Vec<GradientStop>,
}

/// Unvalidated serialized form of [`ColorGradient`]
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GradientStops {
    stops: Vec<GradientStop>,
}

#[cfg(feature = "serde")]
impl TryFrom<GradientStops> for ColorGradient {
    type Error = PlanetError;

    fn try_from(raw: GradientStops) -> Result<Self> {
        ColorGradient::new(raw.stops)
    }
}

#[cfg(feature = "serde")]
impl From<ColorGradient> for GradientStops {
    fn from(gradient: ColorGradient) -> Self {
        Self {
            stops: gradient.stops,
        }
    }
}

impl ColorGradient {
    /// Create a gradient from control points
    ///
    /// # Errors
    ///
    /// Returns `InvalidGradient` if `stops` is empty, a key is not finite, or
    /// keys are not strictly increasing
    pub fn new(stops: Vec<GradientStop>) -> Result<Self> {
        if stops.is_empty() {
            return Err(PlanetError::InvalidGradient(
                "gradient needs at least one stop".into(),
            ));
        }
        if let Some(stop) = stops.iter().find(|s| !s.key.is_finite()) {
            return Err(PlanetError::InvalidGradient(format!(
                "stop key must be finite (got {})",
                stop.key
            )));
        }
        if let Some(pair) = stops.windows(2).find(|w| w[0].key >= w[1].key) {
            return Err(PlanetError::InvalidGradient(format!(
                "keys must be strictly increasing ({} is followed by {})",
                pair[0].key, pair[1].key
            )));
        }
        Ok(Self { stops })
    }

    /// Terrain gradient from deep water through coast, grass and rock to snow
    ///
    /// | key | color |
    /// |---|---|
    /// | -1.0 | deep water |
    /// | -0.25 | shallow water |
    /// | 0.0 | shore |
    /// | 0.0625 | sand |
    /// | 0.125 | grass |
    /// | 0.375 | dirt |
    /// | 0.75 | rock |
    /// | 1.0 | snow |
    pub fn terrain() -> Self {
        Self {
            stops: vec![
                GradientStop::rgb8(-1.0, 0, 0, 128),
                GradientStop::rgb8(-0.25, 0, 0, 255),
                GradientStop::rgb8(0.0, 0, 128, 255),
                GradientStop::rgb8(0.0625, 240, 240, 64),
                GradientStop::rgb8(0.125, 32, 160, 0),
                GradientStop::rgb8(0.375, 224, 224, 0),
                GradientStop::rgb8(0.75, 128, 128, 128),
                GradientStop::rgb8(1.0, 255, 255, 255),
            ],
        }
    }

    /// Control points in key order
    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `value`
    ///
    /// NaN maps to the first color.
    pub fn color_at(&self, value: f32) -> Color {
        // Number of stops at or below `value`
        let upper = self.stops.partition_point(|s| s.key <= value);
        if upper == 0 {
            return self.stops[0].color;
        }
        if upper == self.stops.len() {
            return self.stops[upper - 1].color;
        }

        let lo = &self.stops[upper - 1];
        let hi = &self.stops[upper];
        let t = (value - lo.key) / (hi.key - lo.key);

        let mut color = lo.color;
        for (c, h) in color.iter_mut().zip(hi.color) {
            *c += t * (h - *c);
        }
        color
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::terrain()
    }
}

impl ColorMapper for ColorGradient {
    fn color_at(&self, value: f32) -> Color {
        ColorGradient::color_at(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Color, b: Color) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn test_terrain_keys() {
        let keys: Vec<f32> = ColorGradient::terrain().stops().iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![-1.0, -0.25, 0.0, 0.0625, 0.125, 0.375, 0.75, 1.0]);
        // The builtin gradient passes its own validation
        assert!(ColorGradient::new(ColorGradient::terrain().stops().to_vec()).is_ok());
    }

    #[test]
    fn test_exact_keys_return_exact_colors() {
        let gradient = ColorGradient::terrain();
        for stop in gradient.stops() {
            assert_eq!(gradient.color_at(stop.key), stop.color);
        }
    }

    #[test]
    fn test_clamps_outside_domain() {
        let gradient = ColorGradient::terrain();
        let first = gradient.stops()[0].color;
        let last = gradient.stops()[7].color;

        assert_eq!(gradient.color_at(-1.0), first);
        assert_eq!(gradient.color_at(-5.0), first);
        assert_eq!(gradient.color_at(f32::NEG_INFINITY), first);
        assert_eq!(gradient.color_at(1.0), last);
        assert_eq!(gradient.color_at(3.0), last);
        assert_eq!(gradient.color_at(f32::INFINITY), last);
    }

    #[test]
    fn test_linear_blend() {
        let gradient = ColorGradient::new(vec![
            GradientStop::new(0.0, [0.0, 0.0, 0.0, 1.0]),
            GradientStop::new(2.0, [1.0, 0.5, 0.0, 1.0]),
        ])
        .unwrap();

        assert!(approx_eq(gradient.color_at(0.5), [0.25, 0.125, 0.0, 1.0]));
        assert!(approx_eq(gradient.color_at(1.0), [0.5, 0.25, 0.0, 1.0]));
    }

    #[test]
    fn test_continuous_between_keys() {
        let gradient = ColorGradient::terrain();
        let step = 1e-3;
        let mut value = -1.2;
        let mut previous = gradient.color_at(value);
        while value < 1.2 {
            value += step;
            let color = gradient.color_at(value);
            for (a, b) in previous.iter().zip(color) {
                // Steepest segment is 0.0..0.0625 (about 0.94 per channel)
                assert!((a - b).abs() < 0.02, "Jump at {}: {:?} -> {:?}", value, previous, color);
            }
            previous = color;
        }
    }

    #[test]
    fn test_single_stop() {
        let gradient = ColorGradient::new(vec![GradientStop::new(0.3, [0.1, 0.2, 0.3, 1.0])]).unwrap();
        assert_eq!(gradient.color_at(-10.0), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(gradient.color_at(0.3), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(gradient.color_at(10.0), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_invalid_gradients() {
        assert!(ColorGradient::new(vec![]).is_err());

        let unordered = vec![
            GradientStop::new(0.5, [0.0; 4]),
            GradientStop::new(0.1, [1.0; 4]),
        ];
        assert!(ColorGradient::new(unordered).is_err());

        let duplicate = vec![
            GradientStop::new(0.5, [0.0; 4]),
            GradientStop::new(0.5, [1.0; 4]),
        ];
        assert!(ColorGradient::new(duplicate).is_err());

        let nan = vec![GradientStop::new(f32::NAN, [0.0; 4])];
        assert!(ColorGradient::new(nan).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_gradient_serialization() {
        let gradient = ColorGradient::terrain();
        let json = serde_json::to_string(&gradient).unwrap();
        assert!(json.starts_with(r#"{"stops":"#));

        let restored: ColorGradient = serde_json::from_str(&json).unwrap();
        assert_eq!(gradient, restored);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_invalid_stops() {
        let empty = serde_json::from_str::<ColorGradient>(r#"{"stops":[]}"#);
        assert!(empty.is_err());

        let unordered = r#"{"stops":[
            {"key":0.5,"color":[1.0,0.0,0.0,1.0]},
            {"key":0.1,"color":[0.0,1.0,0.0,1.0]}
        ]}"#;
        let err = serde_json::from_str::<ColorGradient>(unordered).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_rgb8() {
        let stop = GradientStop::rgb8(0.0, 255, 0, 51);
        assert!(approx_eq(stop.color, [1.0, 0.0, 0.2, 1.0]));
    }
}
