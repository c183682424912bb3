//! CPU software rasterizer. Indexed triangle meshes, a model-view-projection
//! matrix and a bound albedo image go in, an RGBA8 color buffer and a float
//! depth buffer come out.

pub mod camera;
pub mod dmd;
pub mod error;
pub mod framebuffer;
pub mod image2d;
pub mod math;
pub mod mesh;
pub mod pixel;
pub mod png_io;
pub mod rasterizer;
pub mod shader;
pub mod utils;

pub use camera::Camera;
pub use dmd::build_model_from_dmd;
pub use error::RasterError;
pub use framebuffer::Framebuffer;
pub use image2d::Image2D;
pub use mesh::{gen_mesh_quad, Material, ModelStatic, RenderUnit, VertexBuffer, VertexStatic};
pub use pixel::{Gray32F, Gray8, Pixel, RGBA32F, RGBA8};
pub use rasterizer::{RasterHit, Rasterizer};
pub use shader::Shader;
