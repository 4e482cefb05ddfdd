//! Render-ready geometry
//!
//! Turns a tick snapshot into colored triangles in screen pixels. Window,
//! GPU upload and text drawing belong to the host.

pub mod shapes;
pub mod vertex;

pub use shapes::{as_bytes, frame, rect};
pub use vertex::{Vertex, colors};
