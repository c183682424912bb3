//! Decoder for a minimal binary model container ("DMD1").
//!
//! Layout, all multi-byte fields little-endian:
//!
//! ```text
//! magic           [u8; 4]   b"DMD1"
//! unit_count      u32
//! units[unit_count]:
//!     index_count     u32
//!     indices         [u32; index_count]
//!     vertex_count    u32
//!     vertices        [VertexStatic as 8 x f32; vertex_count]
//!                         (position.xyz, normal.xyz, uv.xy)
//!     albedo_path_len u32
//!     albedo_path     [u8; albedo_path_len]  (utf8)
//!     roughness       f32
//!     metallic        f32
//!     alpha_blend     u8  (0 or 1)
//! ```

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

use crate::math::{vec2, vec3};
use crate::mesh::{Material, ModelStatic, RenderUnit, VertexBuffer, VertexStatic};

const MAGIC: &[u8; 4] = b"DMD1";

fn read_vertex<R: Read>(r: &mut R) -> io::Result<VertexStatic> {
    let position = vec3(r.read_f32::<LittleEndian>()?, r.read_f32::<LittleEndian>()?, r.read_f32::<LittleEndian>()?);
    let normal = vec3(r.read_f32::<LittleEndian>()?, r.read_f32::<LittleEndian>()?, r.read_f32::<LittleEndian>()?);
    let uv = vec2(r.read_f32::<LittleEndian>()?, r.read_f32::<LittleEndian>()?);
    Ok(VertexStatic::new(position, normal, uv))
}

fn read_unit<R: Read>(r: &mut R) -> io::Result<RenderUnit<'static, VertexStatic>> {
    let index_count = r.read_u32::<LittleEndian>()? as usize;
    let mut indices = Vec::with_capacity(index_count);
    for _ in 0..index_count {
        indices.push(r.read_u32::<LittleEndian>()? as usize);
    }

    let vertex_count = r.read_u32::<LittleEndian>()? as usize;
    let mut src_vertices = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        src_vertices.push(read_vertex(r)?);
    }

    let mut mesh = VertexBuffer::with_capacity(index_count);
    for index in indices {
        let v = src_vertices
            .get(index)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "index out of range"))?;
        mesh.push(*v);
    }

    let path_len = r.read_u32::<LittleEndian>()? as usize;
    let mut path_bytes = vec![0u8; path_len];
    r.read_exact(&mut path_bytes)?;
    let albedo_path = String::from_utf8_lossy(&path_bytes).into_owned();

    let roughness = r.read_f32::<LittleEndian>()?;
    let metallic = r.read_f32::<LittleEndian>()?;
    let alpha_blend = r.read_u8()? != 0;

    let material = Material {
        albedo_path,
        roughness,
        metallic,
        alpha_blend,
        albedo_tex: None,
    };

    Ok(RenderUnit::new(mesh, material))
}

/// Returns `None` on any malformed or truncated input instead of panicking.
pub fn build_model_from_dmd(data: &[u8]) -> Option<ModelStatic<'static>> {
    let mut r = io::Cursor::new(data);

    let mut magic = [0u8; 4];
    r.read_exact(&mut magic).ok()?;
    if &magic != MAGIC {
        return None;
    }

    let unit_count = r.read_u32::<LittleEndian>().ok()? as usize;
    let mut units = Vec::with_capacity(unit_count);
    for _ in 0..unit_count {
        units.push(read_unit(&mut r).ok()?);
    }

    Some(ModelStatic { units })
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Write;

    fn write_unit(buf: &mut Vec<u8>, positions: &[(f32, f32, f32)], indices: &[u32], path: &str) {
        buf.write_u32::<LittleEndian>(indices.len() as u32).unwrap();
        for i in indices {
            buf.write_u32::<LittleEndian>(*i).unwrap();
        }
        buf.write_u32::<LittleEndian>(positions.len() as u32).unwrap();
        for (x, y, z) in positions {
            buf.write_f32::<LittleEndian>(*x).unwrap();
            buf.write_f32::<LittleEndian>(*y).unwrap();
            buf.write_f32::<LittleEndian>(*z).unwrap();
            buf.write_f32::<LittleEndian>(0.0).unwrap();
            buf.write_f32::<LittleEndian>(0.0).unwrap();
            buf.write_f32::<LittleEndian>(1.0).unwrap();
            buf.write_f32::<LittleEndian>(0.0).unwrap();
            buf.write_f32::<LittleEndian>(0.0).unwrap();
        }
        let path_bytes = path.as_bytes();
        buf.write_u32::<LittleEndian>(path_bytes.len() as u32).unwrap();
        buf.write_all(path_bytes).unwrap();
        buf.write_f32::<LittleEndian>(0.5).unwrap();
        buf.write_f32::<LittleEndian>(0.0).unwrap();
        buf.write_u8(0).unwrap();
    }

    #[test]
    fn decodes_single_triangle_unit() {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.write_u32::<LittleEndian>(1).unwrap();
        write_unit(
            &mut buf,
            &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)],
            &[0, 1, 2],
            "albedo.png",
        );

        let model = build_model_from_dmd(&buf).expect("valid buffer decodes");
        assert_eq!(model.units.len(), 1);
        assert_eq!(model.units[0].mesh.len(), 3);
        assert_eq!(model.units[0].material.albedo_path, "albedo.png");
    }

    #[test]
    fn indices_are_expanded_into_a_flat_vertex_buffer() {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.write_u32::<LittleEndian>(1).unwrap();
        write_unit(
            &mut buf,
            &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (1.0, 1.0, 0.0)],
            &[0, 1, 2, 0, 2, 3],
            "quad.png",
        );

        let model = build_model_from_dmd(&buf).unwrap();
        assert_eq!(model.units[0].mesh.len(), 6);
        assert_eq!(model.units[0].mesh[0].position, model.units[0].mesh[3].position);
    }

    #[test]
    fn wrong_magic_returns_none() {
        let buf = b"NOPE".to_vec();
        assert!(build_model_from_dmd(&buf).is_none());
    }

    #[test]
    fn truncated_buffer_returns_none() {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.write_u32::<LittleEndian>(1).unwrap();
        assert!(build_model_from_dmd(&buf).is_none());
    }

    #[test]
    fn out_of_range_index_returns_none_instead_of_panicking() {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.write_u32::<LittleEndian>(1).unwrap();
        write_unit(&mut buf, &[(0.0, 0.0, 0.0)], &[5], "albedo.png");
        assert!(build_model_from_dmd(&buf).is_none());
    }
}
