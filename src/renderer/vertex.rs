//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::frame::DrawRect;
use crate::consts::BLOCK_BORDER_WIDTH;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Block outline (#333)
    pub const BLOCK_BORDER: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}

/// Decode one sRGB-encoded channel to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Color as written to the surface
///
/// Block and outline colors are CSS-style sRGB values. An sRGB surface encodes
/// on write, so they are linearized first; alpha is left alone.
pub fn surface_color(color: [f32; 4], srgb_surface: bool) -> [f32; 4] {
    if !srgb_surface {
        return color;
    }
    let [r, g, b, a] = color;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

/// Map a screen-space point (pixels, Y down) to normalized device coordinates
pub fn screen_to_ndc(point: Vec2, view: Vec2) -> Vec2 {
    Vec2::new(point.x / view.x * 2.0 - 1.0, 1.0 - point.y / view.y * 2.0)
}

/// Two triangles covering the axis-aligned box `min..max`
fn push_quad(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(Vertex::new(corners[i].x, corners[i].y, color));
    }
}

/// Append the fill and a 1-pixel outline for a rectangle (screen space)
pub fn rect_vertices(rect: &DrawRect, out: &mut Vec<Vertex>) {
    let min = rect.origin;
    let max = rect.origin + rect.size;
    push_quad(out, min, max, rect.fill);

    // Outline straddles the edge, as a canvas stroke does
    let half = BLOCK_BORDER_WIDTH / 2.0;
    let lo = min - Vec2::splat(half);
    let hi = max + Vec2::splat(half);
    push_quad(out, lo, Vec2::new(hi.x, lo.y + BLOCK_BORDER_WIDTH), rect.border);
    push_quad(out, Vec2::new(lo.x, hi.y - BLOCK_BORDER_WIDTH), hi, rect.border);
    push_quad(out, lo, Vec2::new(lo.x + BLOCK_BORDER_WIDTH, hi.y), rect.border);
    push_quad(out, Vec2::new(hi.x - BLOCK_BORDER_WIDTH, lo.y), hi, rect.border);
}

/// Triangles for a whole frame, in screen space
pub fn frame_vertices(rects: &[DrawRect]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rects.len() * 30);
    for rect in rects {
        rect_vertices(rect, &mut vertices);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> DrawRect {
        DrawRect {
            origin: Vec2::new(40.0, 580.0),
            size: Vec2::new(320.0, 20.0),
            fill: [1.0, 0.0, 0.0, 1.0],
            border: colors::BLOCK_BORDER,
        }
    }

    #[test]
    fn test_rect_is_fill_plus_four_edges() {
        let vertices = frame_vertices(&[rect(), rect()]);
        assert_eq!(vertices.len(), 2 * 30);
        assert!(vertices[..6].iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
        assert!(vertices[6..30].iter().all(|v| v.color == colors::BLOCK_BORDER));
    }

    #[test]
    fn test_fill_covers_rect() {
        let mut vertices = Vec::new();
        rect_vertices(&rect(), &mut vertices);
        let fill = &vertices[..6];
        let min_x = fill.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_y = fill.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_x, 40.0);
        assert_eq!(max_y, 600.0);
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // Linear segment near black
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-6);
        // #888 and #333
        assert!((srgb_to_linear(0.533) - 0.246).abs() < 1e-3);
        assert!((srgb_to_linear(0.2) - 0.0331).abs() < 1e-3);
    }

    #[test]
    fn test_surface_color_linearizes_for_srgb_only() {
        let border = colors::BLOCK_BORDER;
        assert_eq!(surface_color(border, false), border);

        let linear = surface_color(border, true);
        assert!(linear[..3].iter().all(|&c| c < border[0]));
        assert_eq!(linear[3], 1.0);

        let translucent = surface_color([0.5, 0.5, 0.5, 0.5], true);
        assert_eq!(translucent[3], 0.5);
    }

    #[test]
    fn test_screen_to_ndc_corners() {
        let view = Vec2::new(400.0, 600.0);
        assert_eq!(screen_to_ndc(Vec2::ZERO, view), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(view, view), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(view / 2.0, view), Vec2::ZERO);
    }
}
