use crate::{picture::Color, render::ReflectionConstants};

/* CONFIG */
pub const DEFAULT_SCRIPT: &str = "scripts/default.mdl";
pub const DEFAULT_PICTURE_DIMENSIONS: (usize, usize) = (800, 800);
pub const MAX_PICTURE_PIXELS: usize = 8192 * 8192;
pub const DEFAULT_BACKGROUND_COLOR: Color = BLACK;
pub const DEFAULT_FOREGROUND_COLOR: Color = WHITE;
pub const ENABLE_BACK_FACE_CULLING: bool = true;
pub const DEFAULT_REFLECTION_CONSTANTS: ReflectionConstants = ReflectionConstants {
    ambient: [0.2, 0.2, 0.2],
    diffuse: [0.5, 0.5, 0.5],
    specular: [0.5, 0.5, 0.5],
};
pub const DEFAULT_AMBIENT_LIGHT_COLOR: [f32; 3] = [50.0, 50.0, 50.0];
pub const DEFAULT_POINT_LIGHT: [[f32; 3]; 2] = [[255.0, 255.0, 255.0], [0.0, 0.0, 1.0]];
pub const SPECULAR_EXPONENT: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadingMode {
    Wireframe,
    FlatRandom,
    Flat,
    Lit,
    DepthTested,
}
pub const DEFAULT_SHADING_MODE: ShadingMode = ShadingMode::DepthTested;

/* DEPTH */
// projected z lands in [0, DEPTH_RESOLUTION], so the clear value sits below every real fragment
pub const DEPTH_RESOLUTION: f32 = 255.0;
pub const DEFAULT_DEPTH_CLEAR: f32 = -1.0;
pub const DEPTH_GRAY_CEILING: f32 = 230.0;
// twice the signed area below which a projected triangle counts as degenerate
pub const BARYCENTRIC_EPSILON: f32 = 1e-2;

/* COLORS */
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
