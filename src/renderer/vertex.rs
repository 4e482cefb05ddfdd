//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Screen pixels, origin top-left, y down
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Convert an 8-bit RGB triple to a normalized opaque color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(20, 22, 30);
    pub const GROUND: [f32; 4] = rgb(60, 70, 80);
    pub const PLAYER: [f32; 4] = rgb(218, 173, 106);
    pub const ADVERSARY: [f32; 4] = rgb(200, 80, 80);
    pub const PROJECTILE: [f32; 4] = rgb(250, 230, 120);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(Vertex::STRIDE, 24);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(255, 0, 0), [1.0, 0.0, 0.0, 1.0]);
    }
}
