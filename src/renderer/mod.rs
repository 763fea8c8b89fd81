//! wgpu rendering module
//!
//! Two instanced draws per frame: the quad mesh for both paddles and the disc
//! mesh for the ball.

pub mod pipeline;
pub mod shader;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shader::{ShaderError, ShaderProgram, ShaderStage};
pub use shapes::{Mesh, disc, unit_quad};
