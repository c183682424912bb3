use crate::math::Vec2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterHit {
    pub coord: (u32, u32),
    pub bary: (f32, f32, f32),
}

#[derive(Debug)]
struct PixelBoundingBox {
    min_x: u32,
    max_x: u32,
    min_y: u32,
    max_y: u32,
}

impl PixelBoundingBox {
    fn from_triangle(vertices: &[Vec2; 3], domain: (u32, u32)) -> Self {
        let min_x = vertices.iter().fold(f32::MAX, |a, p| a.min(p.x));
        let max_x = vertices.iter().fold(f32::MIN, |a, p| a.max(p.x));
        let min_y = vertices.iter().fold(f32::MAX, |a, p| a.min(p.y));
        let max_y = vertices.iter().fold(f32::MIN, |a, p| a.max(p.y));

        let clamp_x = |v: f32| v.clamp(0.0, domain.0 as f32);
        let clamp_y = |v: f32| v.clamp(0.0, domain.1 as f32);

        Self {
            min_x: clamp_x(min_x).floor() as u32,
            max_x: clamp_x(max_x).ceil() as u32,
            min_y: clamp_y(min_y).floor() as u32,
            max_y: clamp_y(max_y).ceil() as u32,
        }
    }
}

// Twice the signed area of triangle (a,b,c).
fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

// Top-left rule: a left edge (directed downward) or top edge (horizontal,
// directed leftward) owns its own boundary pixels.
fn is_top_left(a: Vec2, b: Vec2) -> bool {
    let dir = b - a;
    dir.y > 0.0 || (dir.y == 0.0 && dir.x < 0.0)
}

#[derive(Debug, Default)]
pub struct Rasterizer;

impl Rasterizer {
    pub fn new() -> Self {
        Self
    }

    pub fn is_ccw(vertices: &[Vec2; 3]) -> bool {
        let e1 = vertices[1] - vertices[0];
        let e2 = vertices[2] - vertices[0];
        e1.cross(e2) > 0.0
    }

    // output is not cleared here; callers reuse it across triangles.
    pub fn work(&self, vertices: &[Vec2; 3], domain: (u32, u32), output: &mut Vec<RasterHit>) {
        let area = edge(vertices[0], vertices[1], vertices[2]);
        if area == 0.0 {
            return;
        }

        let bbox = PixelBoundingBox::from_triangle(vertices, domain);

        for y in bbox.min_y..bbox.max_y {
            for x in bbox.min_x..bbox.max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let e0 = edge(vertices[1], vertices[2], p);
                let e1 = edge(vertices[2], vertices[0], p);
                let e2 = edge(vertices[0], vertices[1], p);

                let has_neg = e0 < 0.0 || e1 < 0.0 || e2 < 0.0;
                let has_pos = e0 > 0.0 || e1 > 0.0 || e2 > 0.0;
                if has_neg && has_pos {
                    continue;
                }

                if e0 == 0.0 && !is_top_left(vertices[1], vertices[2]) {
                    continue;
                }
                if e1 == 0.0 && !is_top_left(vertices[2], vertices[0]) {
                    continue;
                }
                if e2 == 0.0 && !is_top_left(vertices[0], vertices[1]) {
                    continue;
                }

                output.push(RasterHit {
                    coord: (x, y),
                    bary: (e0 / area, e1 / area, e2 / area),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;

    #[test]
    fn degenerate_triangle_produces_no_hits() {
        let r = Rasterizer::new();
        let verts = [vec2(1.0, 1.0), vec2(1.0, 1.0), vec2(1.0, 1.0)];
        let mut out = Vec::new();
        r.work(&verts, (16, 16), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn covers_pixel_strictly_inside() {
        let r = Rasterizer::new();
        let verts = [vec2(2.0, 2.0), vec2(14.0, 2.0), vec2(2.0, 14.0)];
        let mut out = Vec::new();
        r.work(&verts, (16, 16), &mut out);
        assert!(out.iter().any(|h| h.coord == (3, 3)));
        assert!(!out.iter().any(|h| h.coord == (13, 13)));
    }

    #[test]
    fn barycentrics_sum_to_one() {
        let r = Rasterizer::new();
        let verts = [vec2(2.0, 2.0), vec2(14.0, 2.0), vec2(2.0, 14.0)];
        let mut out = Vec::new();
        r.work(&verts, (16, 16), &mut out);
        for h in &out {
            let sum = h.bary.0 + h.bary.1 + h.bary.2;
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn shared_edge_of_a_quad_is_not_double_covered() {
        let r = Rasterizer::new();
        let mut out = Vec::new();
        r.work(
            &[vec2(0.0, 0.0), vec2(8.0, 0.0), vec2(0.0, 8.0)],
            (8, 8),
            &mut out,
        );
        r.work(
            &[vec2(8.0, 0.0), vec2(8.0, 8.0), vec2(0.0, 8.0)],
            (8, 8),
            &mut out,
        );

        let mut seen = std::collections::HashSet::new();
        for h in &out {
            assert!(seen.insert(h.coord), "pixel {:?} covered twice", h.coord);
        }
        assert_eq!(seen.len(), 8 * 8);
    }

    #[test]
    fn is_ccw_true_for_counter_clockwise_winding() {
        let verts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)];
        assert!(Rasterizer::is_ccw(&verts));
        let reversed = [verts[0], verts[2], verts[1]];
        assert!(!Rasterizer::is_ccw(&reversed));
    }
}
