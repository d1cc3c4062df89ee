// Minimap projection.
// Forward: the part of the scaled image visible in the viewer, as percentages of the minimap.
// Reverse: a click on the minimap (as fractions of its box) recenters the viewer on that point.

use super::transform::{Point, Transform};

/// Visible region in percent of the minimap box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl MinimapRect {
    #[cfg(test)]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Returns `None` while the image or the surface has not been measured yet.
pub fn project(transform: &Transform) -> Option<MinimapRect> {
    let content = transform.content_size();
    let surface = transform.surface_size();
    if content.is_degenerate() || surface.is_degenerate() {
        return None;
    }
    let offset = transform.translation();
    Some(MinimapRect {
        left: 100.0 * (-offset.x / content.width),
        top: 100.0 * (-offset.y / content.height),
        width: (100.0 * surface.width / content.width).min(100.0),
        height: (100.0 * surface.height / content.height).min(100.0),
    })
}

/// Translation that puts the image point at `fraction` of the minimap in the middle of the surface.
/// Not clamped: clicking near an edge may push part of the image off screen.
pub fn recenter_translation(transform: &Transform, fraction: Point) -> Point {
    let content = transform.content_size();
    let surface = transform.surface_size();
    Point::new(
        -(fraction.x * content.width) + surface.width / 2.0,
        -(fraction.y * content.height) + surface.height / 2.0,
    )
}

/// Converts a click in client coordinates into fractions of the minimap bounding box.
pub fn click_fraction(client: Point, box_origin: Point, box_width: f64, box_height: f64) -> Option<Point> {
    if !(box_width > 0.0 && box_height > 0.0) {
        return None;
    }
    Some(Point::new(
        (client.x - box_origin.x) / box_width,
        (client.y - box_origin.y) / box_height,
    ))
}
