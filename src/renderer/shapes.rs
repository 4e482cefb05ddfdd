//! Shape generation for 2D primitives

use super::vertex::{Vertex, colors};
use crate::sim::{Rect, Snapshot};

/// Two triangles covering a box
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (r.left() as f32, r.top() as f32);
    let (x1, y1) = (r.right() as f32, r.bottom() as f32);

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// All geometry for one frame, back to front: background, ground,
/// player, adversary, projectiles.
pub fn frame(snapshot: &Snapshot) -> Vec<Vertex> {
    let screen = snapshot.screen;
    let mut vertices = Vec::with_capacity((4 + snapshot.projectiles.len()) * 6);

    let background = Rect::new(0, 0, screen.width, screen.height);
    vertices.extend(rect(&background, colors::BACKGROUND));

    let ground = Rect::new(
        0,
        snapshot.floor_y,
        screen.width,
        screen.height - snapshot.floor_y,
    );
    vertices.extend(rect(&ground, colors::GROUND));

    vertices.extend(rect(&snapshot.player, colors::PLAYER));
    vertices.extend(rect(&snapshot.adversary, colors::ADVERSARY));

    for projectile in &snapshot.projectiles {
        vertices.extend(rect(projectile, colors::PROJECTILE));
    }

    vertices
}

/// View vertices as raw bytes for buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
