use serde::{Deserialize, Serialize};

/// Pixels of travel per unit of speed at the viewport edge.
const TRAVEL: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pointer position normalized to the viewport, each axis in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn from_client(client_x: f64, client_y: f64, viewport: Viewport) -> Self {
        Self {
            x: normalize(client_x, viewport.width),
            y: normalize(client_y, viewport.height),
        }
    }
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

fn normalize(value: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.5;
    }
    (value / extent).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn for_pointer(pointer: PointerPosition, speed: f64) -> Self {
        Self {
            x: (pointer.x - 0.5) * speed * TRAVEL,
            y: (pointer.y - 0.5) * speed * TRAVEL,
        }
    }

    /// Inline CSS transform for the offset.
    pub fn transform(&self) -> String {
        format!("transform: translate({}px, {}px)", round(self.x), round(self.y))
    }
}

fn round(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    // avoid "-0px"
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// A decorative background blob that drifts with the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    /// Tailwind classes for position, size and colour.
    pub class: String,
    pub speed: f64,
}

impl ParallaxLayer {
    pub fn style(&self, pointer: PointerPosition) -> String {
        Offset::for_pointer(pointer, self.speed).transform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Viewport = Viewport {
        width: 1000.0,
        height: 1000.0,
    };

    #[test]
    fn test_center_has_no_offset() {
        let pointer = PointerPosition::from_client(500.0, 500.0, SQUARE);
        for speed in [0.0, 0.05, 0.12, 1.0, 7.5] {
            assert_eq!(Offset::for_pointer(pointer, speed), Offset { x: 0.0, y: 0.0 });
        }
        assert_eq!(
            Offset::for_pointer(PointerPosition::default(), 0.3).transform(),
            "transform: translate(0px, 0px)"
        );
    }

    #[test]
    fn test_offset_scales_with_speed() {
        let pointer = PointerPosition::from_client(1000.0, 0.0, SQUARE);
        let offset = Offset::for_pointer(pointer, 0.1);
        assert!((offset.x - 5.0).abs() < 1e-9);
        assert!((offset.y + 5.0).abs() < 1e-9);
        assert_eq!(offset.transform(), "transform: translate(5px, -5px)");

        let pointer = PointerPosition::from_client(750.0, 250.0, SQUARE);
        let layer = ParallaxLayer {
            class: String::new(),
            speed: 0.08,
        };
        assert_eq!(layer.style(pointer), "transform: translate(2px, -2px)");
    }

    #[test]
    fn test_degenerate_viewport_is_centered() {
        let pointer = PointerPosition::from_client(
            300.0,
            40.0,
            Viewport {
                width: 0.0,
                height: -10.0,
            },
        );
        assert_eq!(pointer, PointerPosition::CENTER);
    }

    #[test]
    fn test_pointer_is_clamped() {
        let pointer = PointerPosition::from_client(-50.0, 2500.0, SQUARE);
        assert_eq!(pointer, PointerPosition { x: 0.0, y: 1.0 });
    }
}
