//! Rendering module
//!
//! `frame` builds a platform-independent draw list; `pipeline` draws it with
//! WebGPU as flat-colored triangles.

pub mod frame;
pub mod pipeline;
pub mod vertex;

pub use frame::{DrawRect, build_frame};
pub use pipeline::RenderState;
