//! Shape primitives - region membership and region fills.
//!
//! Regions are pure geometry. A [`Layer`] pairs a region with a [`Paint`]
//! so sprite rules can be written as static tables and resolved against a
//! base/shade colour pair at draw time.
//!
//! Diamond and disk centres are stored in half-pixel units (`cx2 = 2 * cx`)
//! so a shape can sit between pixels while all arithmetic stays integral.

use crate::types::{Canvas, Colour};

/// Axis-aligned rectangle, half-open: `x0 <= x < x1`, `y0 <= y < y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A single pixel.
    pub const fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, x + 1, y + 1)
    }

    /// The rectangle covering a whole canvas.
    pub fn of_canvas(canvas: &Canvas) -> Self {
        Self::new(0, 0, canvas.width() as i32, canvas.height() as i32)
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        )
    }

    fn is_edge(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && (x == self.x0 || x == self.x1 - 1 || y == self.y0 || y == self.y1 - 1)
    }
}

/// A set of pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Filled rectangle.
    Rect(Rect),
    /// Manhattan ball: `|2x - cx2| + |2y - cy2| <= r2`.
    Diamond { cx2: i32, cy2: i32, r2: i32 },
    /// Euclidean ball: `(2x - cx2)^2 + (2y - cy2)^2 <= limit`.
    Disk { cx2: i32, cy2: i32, limit: i32 },
    /// Outline of a rectangle, one pixel wide.
    Border(Rect),
    /// Columns of a rectangle where `(x - x0) % period < on`.
    Stripes { rect: Rect, period: i32, on: i32 },
}

impl Region {
    /// Diamond centred on a whole pixel.
    pub const fn diamond(cx: i32, cy: i32, r: i32) -> Self {
        Region::Diamond {
            cx2: cx * 2,
            cy2: cy * 2,
            r2: r * 2,
        }
    }

    /// Disk with centre and radius in half-pixel units.
    pub const fn disk_half(cx2: i32, cy2: i32, r2: i32) -> Self {
        Region::Disk {
            cx2,
            cy2,
            limit: r2 * r2,
        }
    }

    /// Test whether a pixel belongs to the region.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match *self {
            Region::Rect(r) => r.contains(x, y),
            Region::Diamond { cx2, cy2, r2 } => {
                (2 * x - cx2).abs() + (2 * y - cy2).abs() <= r2
            }
            Region::Disk { cx2, cy2, limit } => {
                let dx = 2 * x - cx2;
                let dy = 2 * y - cy2;
                dx * dx + dy * dy <= limit
            }
            Region::Border(r) => r.is_edge(x, y),
            Region::Stripes { rect, period, on } => {
                rect.contains(x, y) && (x - rect.x0) % period < on
            }
        }
    }

    /// A rectangle guaranteed to hold every member pixel.
    pub fn bounds(&self) -> Rect {
        match *self {
            Region::Rect(r) | Region::Border(r) => r,
            Region::Stripes { rect, .. } => rect,
            Region::Diamond { cx2, cy2, r2 } => half_box(cx2, cy2, r2),
            Region::Disk { cx2, cy2, limit } => half_box(cx2, cy2, isqrt(limit) + 1),
        }
    }
}

/// Box around a half-pixel centre with a half-pixel reach.
fn half_box(cx2: i32, cy2: i32, reach2: i32) -> Rect {
    Rect::new(
        (cx2 - reach2).div_euclid(2),
        (cy2 - reach2).div_euclid(2),
        (cx2 + reach2).div_euclid(2) + 1,
        (cy2 + reach2).div_euclid(2) + 1,
    )
}

fn isqrt(n: i32) -> i32 {
    (n.max(0) as f64).sqrt() as i32
}

/// Which colour a layer is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// The rule's base colour.
    Base,
    /// The rule's shade colour.
    Shade,
    /// A colour independent of the rule.
    Fixed(Colour),
}

impl Paint {
    pub fn resolve(self, base: Colour, shade: Colour) -> Colour {
        match self {
            Paint::Base => base,
            Paint::Shade => shade,
            Paint::Fixed(c) => c,
        }
    }
}

/// A region painted in one colour, optionally limited to a clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub region: Region,
    pub paint: Paint,
    pub clip: Option<Rect>,
}

impl Layer {
    pub const fn new(region: Region, paint: Paint) -> Self {
        Self {
            region,
            paint,
            clip: None,
        }
    }

    pub const fn base(region: Region) -> Self {
        Self::new(region, Paint::Base)
    }

    pub const fn shade(region: Region) -> Self {
        Self::new(region, Paint::Shade)
    }

    pub const fn fixed(region: Region, colour: Colour) -> Self {
        Self::new(region, Paint::Fixed(colour))
    }

    /// Restrict the layer to `clip`.
    pub const fn clipped(self, clip: Rect) -> Self {
        Self {
            clip: Some(clip),
            ..self
        }
    }
}

/// Overwrite every pixel of `region` (inside the canvas and `clip`) with `colour`.
pub fn fill_region(canvas: &mut Canvas, region: &Region, colour: Colour, clip: Option<Rect>) {
    let mut area = region.bounds().intersect(&Rect::of_canvas(canvas));
    if let Some(clip) = clip {
        area = area.intersect(&clip);
    }
    if area.is_empty() {
        return;
    }

    for y in area.y0..area.y1 {
        for x in area.x0..area.x1 {
            if region.contains(x, y) {
                canvas.set(x, y, colour);
            }
        }
    }
}

/// Draw layers in order, resolving paints against `base` and `shade`.
pub fn draw_layers(canvas: &mut Canvas, layers: &[Layer], base: Colour, shade: Colour) {
    for layer in layers {
        let colour = layer.paint.resolve(base, shade);
        fill_region(canvas, &layer.region, colour, layer.clip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Colour {
        Colour::rgb(255, 0, 0)
    }

    fn members(region: Region, w: i32, h: i32) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if region.contains(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_rect_is_half_open() {
        let r = Region::Rect(Rect::new(1, 1, 3, 2));
        assert_eq!(members(r, 5, 5), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_diamond_is_inclusive() {
        let d = Region::diamond(2, 2, 1);
        assert_eq!(members(d, 5, 5), vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_half_pixel_diamond() {
        // centre 1.5, radius 2: every pixel of a 4x4 except the corners
        let d = Region::Diamond { cx2: 3, cy2: 3, r2: 4 };
        let m = members(d, 4, 4);
        assert_eq!(m.len(), 12);
        assert!(!m.contains(&(0, 0)));
        assert!(!m.contains(&(3, 3)));
        assert!(m.contains(&(0, 1)));
    }

    #[test]
    fn test_disk_uses_squared_distance() {
        let d = Region::disk_half(4, 4, 2); // centre 2, radius 1
        assert_eq!(members(d, 5, 5), vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_border_only_edges() {
        let b = Region::Border(Rect::new(0, 0, 3, 3));
        let m = members(b, 3, 3);
        assert_eq!(m.len(), 8);
        assert!(!m.contains(&(1, 1)));
    }

    #[test]
    fn test_stripes_modulo_rule() {
        let s = Region::Stripes {
            rect: Rect::new(6, 0, 12, 1),
            period: 3,
            on: 2,
        };
        let xs: Vec<i32> = members(s, 12, 1).into_iter().map(|(x, _)| x).collect();
        assert_eq!(xs, vec![6, 7, 9, 10]);
    }

    #[test]
    fn test_bounds_hold_all_members() {
        let regions = [
            Region::Diamond { cx2: 17, cy2: 17, r2: 18 },
            Region::disk_half(9, 9, 9),
            Region::Disk { cx2: 7, cy2: 7, limit: 48 },
        ];
        for region in regions {
            let b = region.bounds();
            for y in -20..40 {
                for x in -20..40 {
                    if region.contains(x, y) {
                        assert!(b.contains(x, y), "{:?} misses ({}, {})", region, x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_fill_region_clips_to_canvas() {
        let mut c = Canvas::new(4, 4);
        fill_region(&mut c, &Region::Rect(Rect::new(-5, -5, 2, 2)), red(), None);
        assert_eq!(c.opaque_pixel_count(), 4);
    }

    #[test]
    fn test_fill_region_respects_clip() {
        let mut c = Canvas::new(8, 8);
        fill_region(&mut c, &Region::diamond(3, 3, 4), red(), Some(Rect::new(1, 1, 7, 7)));
        assert_eq!(c.get(0, 3), Some(Colour::TRANSPARENT));
        assert_eq!(c.get(1, 3), Some(red()));
    }

    #[test]
    fn test_draw_layers_resolves_paint_in_order() {
        let mut c = Canvas::new(3, 3);
        let layers = [
            Layer::base(Region::Rect(Rect::new(0, 0, 3, 3))),
            Layer::shade(Region::Border(Rect::new(0, 0, 3, 3))),
            Layer::fixed(Region::Rect(Rect::point(1, 1)), Colour::WHITE),
        ];
        draw_layers(&mut c, &layers, red(), red().shade());
        assert_eq!(c.get(0, 0), Some(Colour::rgb(178, 0, 0)));
        assert_eq!(c.get(1, 1), Some(Colour::WHITE));
    }
}
