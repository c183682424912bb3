use crate::image2d::Image2D;
use crate::math::{vec2, vec3, Vec2, Vec3};
use crate::pixel::RGBA8;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct VertexStatic {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl VertexStatic {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

pub type VertexBuffer<V> = Vec<V>;

// albedo_tex is a weak reference; the material does not own the texture.
#[derive(Debug, Clone)]
pub struct Material<'a> {
    pub albedo_path: String,
    pub roughness: f32,
    pub metallic: f32,
    pub alpha_blend: bool,
    pub albedo_tex: Option<&'a Image2D<RGBA8>>,
}

impl<'a> Material<'a> {
    pub fn new(albedo_path: impl Into<String>) -> Self {
        Self {
            albedo_path: albedo_path.into(),
            roughness: 1.0,
            metallic: 0.0,
            alpha_blend: false,
            albedo_tex: None,
        }
    }
}

pub struct RenderUnit<'a, V> {
    pub mesh: VertexBuffer<V>,
    pub material: Material<'a>,
    pub weight_center: Vec3,
}

pub trait HasPosition {
    fn position(&self) -> Vec3;
}

impl HasPosition for VertexStatic {
    fn position(&self) -> Vec3 {
        self.position
    }
}

fn calc_weight_center<V: HasPosition>(vertices: &[V]) -> Vec3 {
    let mut sum = Vec3::zero();
    for v in vertices {
        sum = sum + v.position();
    }
    let n = vertices.len().max(1) as f32;
    vec3(sum.x / n, sum.y / n, sum.z / n)
}

impl<'a, V: HasPosition> RenderUnit<'a, V> {
    pub fn new(mesh: VertexBuffer<V>, material: Material<'a>) -> Self {
        let weight_center = calc_weight_center(&mesh);
        Self {
            mesh,
            material,
            weight_center,
        }
    }
}

pub struct ModelStatic<'a> {
    pub units: Vec<RenderUnit<'a, VertexStatic>>,
}

// Two CCW triangles (p0,p1,p2) and (p0,p2,p3) covering quad p0-p1-p2-p3.
#[allow(unused)]
pub fn gen_mesh_quad(output: &mut VertexBuffer<VertexStatic>, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) {
    let zero = Vec3::zero();
    output.push(VertexStatic::new(p0, zero, vec2(0.0, 0.0)));
    output.push(VertexStatic::new(p1, zero, vec2(0.0, 1.0)));
    output.push(VertexStatic::new(p2, zero, vec2(1.0, 1.0)));

    output.push(VertexStatic::new(p0, zero, vec2(0.0, 0.0)));
    output.push(VertexStatic::new(p2, zero, vec2(1.0, 1.0)));
    output.push(VertexStatic::new(p3, zero, vec2(1.0, 0.0)));
}
