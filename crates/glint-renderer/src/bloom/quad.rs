//! Shared fullscreen quad geometry.

use wgpu::util::DeviceExt;

use super::types::QuadVertex;

/// Number of vertices in the quad (two triangles).
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Fullscreen quad vertices spanning [-1, 1] on both axes.
///
/// Texture coordinates put v = 0 at the top edge, which is where wgpu
/// places the first row of a texture.
pub fn quad_vertices() -> [QuadVertex; QUAD_VERTEX_COUNT as usize] {
    let corner = |x: f32, y: f32| QuadVertex {
        position: [x, y],
        texcoord: [x * 0.5 + 0.5, 0.5 - y * 0.5],
    };
    [
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(-1.0, 1.0),
        corner(-1.0, 1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
    ]
}

/// Static vertex buffer holding [`quad_vertices`], shared by every program.
pub struct FullscreenQuad {
    buffer: wgpu::Buffer,
}

impl FullscreenQuad {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fullscreen quad"),
            contents: bytemuck::cast_slice(&quad_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self { buffer }
    }

    /// Bind the vertex buffer to slot 0 and draw both triangles.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.buffer.slice(..));
        pass.draw(0..QUAD_VERTEX_COUNT, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_has_six_vertices_spanning_clip_space() {
        let verts = quad_vertices();
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0].abs() == 1.0 && v.position[1].abs() == 1.0);
        }
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.contains(&-1.0) && xs.contains(&1.0));
        assert!(ys.contains(&-1.0) && ys.contains(&1.0));
    }

    #[test]
    fn quad_covers_both_triangles_of_the_square() {
        let verts = quad_vertices();
        let area = |t: &[QuadVertex]| {
            let [a, b, c] = [t[0].position, t[1].position, t[2].position];
            ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
        };
        assert_eq!(area(&verts[0..3]) + area(&verts[3..6]), 4.0);
    }

    #[test]
    fn texcoords_put_top_edge_at_v_zero() {
        for v in quad_vertices() {
            let expected_u = if v.position[0] < 0.0 { 0.0 } else { 1.0 };
            let expected_v = if v.position[1] > 0.0 { 0.0 } else { 1.0 };
            assert_eq!(v.texcoord, [expected_u, expected_v]);
        }
    }
}
