// Viewport transform for the image viewer: scale + translation over a fixed-size image.

pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 6.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero (or not yet measured).
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A single change requested by the gesture controller or a toolbar command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mutation {
    ZoomDelta(f64),
    ZoomFactor(f64),
    TranslateTo(Point),
    Reset,
}

/// Scale + translation of the zoomed image. Rendering composes `translate(x, y)` then `scale(s)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    scale: f64,
    translation: Point,
    natural_size: Size,
    surface_size: Size,
}

impl Transform {
    pub fn new(natural_size: Size, surface_size: Size) -> Self {
        Self {
            scale: 1.0,
            translation: Point::default(),
            natural_size,
            surface_size,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translation(&self) -> Point {
        self.translation
    }

    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = size;
    }

    /// Size of the image after scaling.
    pub fn content_size(&self) -> Size {
        Size::new(
            self.natural_size.width * self.scale,
            self.natural_size.height * self.scale,
        )
    }

    pub fn apply_zoom_delta(&mut self, delta: f64) {
        self.set_scale(self.scale + delta);
    }

    pub fn apply_zoom_multiplicative(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.translation = Point::new(x, y);
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.translation = Point::default();
    }

    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::ZoomDelta(d) => self.apply_zoom_delta(d),
            Mutation::ZoomFactor(f) => self.apply_zoom_multiplicative(f),
            Mutation::TranslateTo(p) => self.set_translation(p.x, p.y),
            Mutation::Reset => self.reset(),
        }
    }

    /// CSS `transform` value for the rendered image.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translation.x, self.translation.y, self.scale
        )
    }

    fn set_scale(&mut self, next: f64) {
        // NaN would slip through clamp; keep the previous scale instead
        if next.is_nan() {
            return;
        }
        self.scale = next.clamp(MIN_SCALE, MAX_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn transform() -> Transform {
        Transform::new(Size::new(1000.0, 500.0), Size::new(500.0, 500.0))
    }

    #[test]
    fn starts_at_identity() {
        let t = transform();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Point::default());
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut t = transform();
        let deltas = [0.5, 3.0, 10.0, -0.1, -20.0, 0.05, 1e9, -1e9, 2.0];
        for d in deltas {
            t.apply_zoom_delta(d);
            assert!(t.scale() >= MIN_SCALE && t.scale() <= MAX_SCALE, "scale {}", t.scale());
        }
        let factors = [2.0, 10.0, 0.01, 0.5, 100.0, 0.0, f64::INFINITY];
        for f in factors {
            t.apply_zoom_multiplicative(f);
            assert!(t.scale() >= MIN_SCALE && t.scale() <= MAX_SCALE, "scale {}", t.scale());
        }
    }

    #[test]
    fn zoom_saturates_at_edges() {
        let mut t = transform();
        t.apply_zoom_delta(100.0);
        assert_eq!(t.scale(), MAX_SCALE);
        t.apply_zoom_delta(0.2);
        assert_eq!(t.scale(), MAX_SCALE);
        t.apply_zoom_delta(-100.0);
        assert_eq!(t.scale(), MIN_SCALE);
    }

    #[test]
    fn nan_zoom_keeps_previous_scale() {
        let mut t = transform();
        t.apply_zoom_delta(0.5);
        t.apply_zoom_multiplicative(f64::NAN);
        assert!(approx_eq(t.scale(), 1.5));
    }

    #[test]
    fn reset_returns_to_identity_and_is_idempotent() {
        let mut t = transform();
        t.apply_zoom_delta(2.3);
        t.set_translation(-40.0, 75.5);
        t.reset();
        let once = t.clone();
        t.reset();
        assert_eq!(t, once);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Point::new(0.0, 0.0));
    }

    #[test]
    fn translation_is_not_clamped() {
        let mut t = transform();
        t.set_translation(-1e6, 1e6);
        assert_eq!(t.translation(), Point::new(-1e6, 1e6));
    }

    #[test]
    fn css_composes_translate_then_scale() {
        let mut t = transform();
        t.set_translation(12.0, -3.5);
        t.apply_zoom_delta(1.0);
        assert_eq!(t.css(), "translate(12px, -3.5px) scale(2)");
    }

    #[test]
    fn degenerate_sizes() {
        assert!(Size::new(0.0, 10.0).is_degenerate());
        assert!(Size::new(10.0, 0.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }
}
