//! Row-major 2D pixel container. Indexing is `x + y * W`, no modular wrap.

use crate::pixel::{Pixel, RGBA32F};

#[derive(Debug, Clone)]
pub struct Image2D<P> {
    data: Vec<P>,
    width: u32,
    height: u32,
}

impl<P: Pixel> Image2D<P> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![P::default(); (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (x + y * self.width) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> P {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, value: P) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    pub fn fill(&mut self, value: P) {
        for p in self.data.iter_mut() {
            *p = value;
        }
    }

    pub fn sample_nearest(&self, u: f32, v: f32) -> RGBA32F {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let x = (u * (self.width.max(1) - 1) as f32).floor() as u32;
        let y = (v * (self.height.max(1) - 1) as f32).floor() as u32;
        self.get(x, y).to_rgba32f()
    }

    pub fn sample_bilinear(&self, u: f32, v: f32) -> RGBA32F {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let xf = u * (self.width.max(1) - 1) as f32;
        let yf = v * (self.height.max(1) - 1) as f32;

        let x0 = xf.floor() as u32;
        let y0 = yf.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = xf - x0 as f32;
        let fy = yf - y0 as f32;

        let c00 = self.get(x0, y0).to_rgba32f();
        let c10 = self.get(x1, y0).to_rgba32f();
        let c01 = self.get(x0, y1).to_rgba32f();
        let c11 = self.get(x1, y1).to_rgba32f();

        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
        let mix = |a: RGBA32F, b: RGBA32F, t: f32| RGBA32F {
            r: lerp(a.r, b.r, t),
            g: lerp(a.g, b.g, t),
            b: lerp(a.b, b.b, t),
            a: lerp(a.a, b.a, t),
        };

        let top = mix(c00, c10, fx);
        let bottom = mix(c01, c11, fx);
        mix(top, bottom, fy)
    }

    pub fn convert<Q>(&self) -> Image2D<Q>
    where
        Q: Pixel + From<P>,
    {
        Image2D {
            data: self.data.iter().map(|&p| Q::from(p)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}
