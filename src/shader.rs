use log::trace;

use crate::framebuffer::Framebuffer;
use crate::image2d::Image2D;
use crate::math::{vec2, Mat4, Vec2};
use crate::mesh::{VertexBuffer, VertexStatic};
use crate::pixel::{Gray32F, RGBA8};
use crate::rasterizer::Rasterizer;

#[derive(Debug, Default)]
pub struct Shader {
    rasterizer: Rasterizer,
    hits: std::cell::RefCell<Vec<crate::rasterizer::RasterHit>>,
}

impl Shader {
    pub fn new() -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            hits: std::cell::RefCell::new(Vec::new()),
        }
    }

    // A trailing partial triple (vb.len() % 3 != 0) is ignored.
    pub fn draw(&self, mvp: Mat4, vb: &VertexBuffer<VertexStatic>, albedo: &Image2D<RGBA8>, out: &mut Framebuffer) {
        let (w, h) = (out.width(), out.height());

        for tri in vb.chunks_exact(3) {
            let clip = [
                mvp * tri[0].position.extend(1.0),
                mvp * tri[1].position.extend(1.0),
                mvp * tri[2].position.extend(1.0),
            ];

            if clip.iter().any(|v| v.w <= 0.0) {
                trace!("skipping triangle with a vertex at w <= 0");
                continue;
            }

            let rw = [1.0 / clip[0].w, 1.0 / clip[1].w, 1.0 / clip[2].w];
            let ndc_z = [clip[0].z * rw[0], clip[1].z * rw[1], clip[2].z * rw[2]];

            let screen = [
                Vec2::new(clip[0].x * rw[0] * (w as f32) / 2.0 + (w as f32) / 2.0, clip[0].y * rw[0] * (h as f32) / 2.0 + (h as f32) / 2.0),
                Vec2::new(clip[1].x * rw[1] * (w as f32) / 2.0 + (w as f32) / 2.0, clip[1].y * rw[1] * (h as f32) / 2.0 + (h as f32) / 2.0),
                Vec2::new(clip[2].x * rw[2] * (w as f32) / 2.0 + (w as f32) / 2.0, clip[2].y * rw[2] * (h as f32) / 2.0 + (h as f32) / 2.0),
            ];

            if !Rasterizer::is_ccw(&screen) {
                trace!("skipping back-facing triangle");
                continue;
            }

            let mut hits = self.hits.borrow_mut();
            hits.clear();
            self.rasterizer.work(&screen, (w, h), &mut hits);

            for hit in hits.iter() {
                let (w0, w1, w2) = hit.bary;

                // Raw barycentrics: ndc_z is already post-divide.
                let depth = 1.0 / (w0 / ndc_z[0] + w1 / ndc_z[1] + w2 / ndc_z[2]);

                let (x, y) = hit.coord;
                let stored = out.depth.get(x, y).color();
                if depth >= stored {
                    continue;
                }

                let fu = w0 * rw[0];
                let fv = w1 * rw[1];
                let fw = w2 * rw[2];
                let sum = fu + fv + fw;
                let (bu, bv, bw) = (fu / sum, fv / sum, fw / sum);

                let uv = vec2(
                    tri[0].uv.x * bu + tri[1].uv.x * bv + tri[2].uv.x * bw,
                    tri[0].uv.y * bu + tri[1].uv.y * bv + tri[2].uv.y * bw,
                );

                let color = albedo.sample_bilinear(uv.x, uv.y);

                out.color.set(x, y, color.into());
                out.depth.set(x, y, Gray32F::new(depth));
            }
        }
    }
}
