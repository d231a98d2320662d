pub mod barycentric;
pub mod depth_buffer;
pub mod lighting;
pub mod line;
pub mod polygon_list;
pub mod scan_line;

pub use crate::picture::Picture;
pub use depth_buffer::{DepthBuffer, render_depth_buffer};
pub use lighting::{LightingConfig, ReflectionConstants, get_illumination};
