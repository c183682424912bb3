//! Spins a textured quad in front of a free-look camera in a `minifb` window.

use std::time::Instant;

use log::{debug, warn};

use rusterizer::math::{self, transform, vec3, Mat4};
use rusterizer::mesh::gen_mesh_quad;
use rusterizer::{png_io, Camera, Framebuffer, Image2D, Shader, VertexBuffer, RGBA8};

const WIDTH: usize = 800;
const HEIGHT: usize = 800;

fn checkerboard(tiles: u32, tile_size: u32) -> Image2D<RGBA8> {
    let n = tiles * tile_size;
    let mut img = Image2D::<RGBA8>::new(n, n);
    for y in 0..n {
        for x in 0..n {
            let c = if (x / tile_size + y / tile_size) % 2 == 0 { 255 } else { 40 };
            img.set(x, y, RGBA8::new(c, c, c, 255));
        }
    }
    img
}

// `--texture <path>` loads an albedo PNG; falls back to a checkerboard.
fn load_albedo() -> Image2D<RGBA8> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 3 && args[1] == "--texture" {
        match png_io::decode_rgba8_file(&args[2]) {
            Ok(img) => return img,
            Err(e) => warn!("failed to load {}: {}, falling back to checkerboard", args[2], e),
        }
    }
    checkerboard(4, 16)
}

fn to_minifb_buffer(color: &Image2D<RGBA8>, out: &mut Vec<u32>) {
    out.clear();
    for y in 0..color.height() {
        for x in 0..color.width() {
            let p = color.get(x, y);
            out.push((p.r as u32) << 16 | (p.g as u32) << 8 | p.b as u32);
        }
    }
}

fn main() {
    env_logger::init();

    let mut window = minifb::Window::new("rusterizer demo", WIDTH, HEIGHT, minifb::WindowOptions::default())
        .unwrap_or_else(|e| panic!("failed to open window: {}", e));

    let mut camera = Camera::new(vec3(0.0, 0.0, -2.5), 0.0, 0.0);
    let proj = math::project(0.1, 100.0, HEIGHT as f32 / WIDTH as f32, std::f32::consts::FRAC_PI_2);

    let albedo = load_albedo();

    let mut vb = VertexBuffer::new();
    gen_mesh_quad(
        &mut vb,
        vec3(-1.0, 1.0, 0.0),
        vec3(-1.0, -1.0, 0.0),
        vec3(1.0, -1.0, 0.0),
        vec3(1.0, 1.0, 0.0),
    );

    let shader = Shader::new();
    let mut fb = Framebuffer::new(WIDTH as u32, HEIGHT as u32);
    let mut pixel_buf = Vec::with_capacity(WIDTH * HEIGHT);

    let mut frame_time_idx = 0;
    let start = Instant::now();

    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        let t0 = Instant::now();

        let spin = start.elapsed().as_secs_f32();
        let model: Mat4 = transform::rotate(0.0, spin, 0.0);
        let mvp = proj * camera.view_matrix() * model;

        fb.clear(RGBA8::default());
        shader.draw(mvp, &vb, &albedo, &mut fb);

        to_minifb_buffer(&fb.color, &mut pixel_buf);
        if let Err(e) = window.update_with_buffer(&pixel_buf, WIDTH, HEIGHT) {
            debug!("window update failed, exiting: {}", e);
            break;
        }

        if window.is_key_down(minifb::Key::W) {
            camera.move_forward(vec3(0.0, 0.0, 0.05));
        }
        if window.is_key_down(minifb::Key::S) {
            camera.move_forward(vec3(0.0, 0.0, -0.05));
        }

        frame_time_idx += 1;
        if frame_time_idx % 100 == 0 {
            let dt = t0.elapsed().as_secs_f32();
            debug!("frame time {:.2} ms ({:.1} fps)", dt * 1000.0, 1.0 / dt);
        }
    }
}
