use rand::Rng;

type Vector = [f32; 3];

use crate::{
    constants::{DEPTH_RESOLUTION, ShadingMode},
    interpreter::mesh::Mesh,
    picture::{Color, Picture},
    vector::{cross_product, subtract_vectors},
};
use super::{
    depth_buffer::DepthBuffer,
    line::Point,
    scan_line::{draw_triangle, fill_triangle, fill_triangle_depth_tested},
    LightingConfig, ReflectionConstants, get_illumination,
};

/// Everything a render pass reads but never changes.
pub struct Scene<'a> {
    pub mesh: &'a Mesh,
    pub lighting: &'a LightingConfig,
    pub reflection: &'a ReflectionConstants,
    pub back_face_culling: bool,
}

/// Maps a model-space vertex (each coordinate in [-1, 1]) onto the picture,
/// with z spread over [0, DEPTH_RESOLUTION].
pub fn project(v: &Vector, width: usize, height: usize) -> Vector {
    [
        (v[0] + 1.0) * width as f32 / 2.0,
        (v[1] + 1.0) * height as f32 / 2.0,
        (v[2] + 1.0) * DEPTH_RESOLUTION / 2.0,
    ]
}

fn to_point(v: &Vector) -> Point {
    [v[0] as isize, v[1] as isize]
}

/// Draws every face of the scene's mesh and returns how many of them put pixels down.
pub fn render_polygons(
    scene: &Scene, picture: &mut Picture, depth_buffer: &mut DepthBuffer,
    color: Color, shading_mode: ShadingMode,
) -> usize {
    let mesh = scene.mesh;
    let mut rng = rand::rng();
    let mut drawn_faces = 0;

    for i in 0..mesh.face_count() {
        let face = mesh.face(i);
        let (Some(v0), Some(v1), Some(v2)) = (
            mesh.vertices.get(face[0]),
            mesh.vertices.get(face[1]),
            mesh.vertices.get(face[2]),
        ) else {
            log::warn!("face {} references a missing vertex, skipped", i);
            continue;
        };

        // the viewer looks down <0, 0, -1>, so a face is visible when its normal has a positive z
        let normal = cross_product(&subtract_vectors(v1, v0), &subtract_vectors(v2, v0));
        if scene.back_face_culling && normal[2] <= 0.0 {
            continue;
        }

        let screen = [
            project(v0, picture.xres, picture.yres),
            project(v1, picture.xres, picture.yres),
            project(v2, picture.xres, picture.yres),
        ];
        let points = [to_point(&screen[0]), to_point(&screen[1]), to_point(&screen[2])];

        let drawn = match shading_mode {
            ShadingMode::Wireframe => {
                draw_triangle(points[0], points[1], points[2], picture, color)
            }
            ShadingMode::FlatRandom => {
                let random_color = Color::rgb(rng.random(), rng.random(), rng.random());
                fill_triangle(points[0], points[1], points[2], picture, random_color)
            }
            ShadingMode::Flat => {
                fill_triangle(points[0], points[1], points[2], picture, color)
            }
            ShadingMode::Lit => {
                let shade = get_illumination(&normal, scene.lighting, scene.reflection);
                fill_triangle(points[0], points[1], points[2], picture, shade)
            }
            ShadingMode::DepthTested => {
                let shade = get_illumination(&normal, scene.lighting, scene.reflection);
                fill_triangle_depth_tested(screen[0], screen[1], screen[2], depth_buffer, picture, shade)
            }
        };

        if drawn {
            drawn_faces += 1;
        } else {
            log::trace!("face {} drew nothing", i);
        }
    }

    log::debug!("{:?} pass: {} of {} faces drawn", shading_mode, drawn_faces, mesh.face_count());

    drawn_faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLACK, DEFAULT_REFLECTION_CONSTANTS, WHITE};

    fn front_and_back() -> Mesh {
        Mesh {
            vertices: vec![
                [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0],
                [-0.5, -0.5, 0.5], [0.0, 0.5, 0.5], [0.5, -0.5, 0.5],
            ],
            // the second face winds the other way
            faces: vec![[0, 1, 2], [3, 4, 5]],
        }
    }

    fn render(mesh: &Mesh, culling: bool, mode: ShadingMode) -> (usize, Picture, DepthBuffer) {
        let lighting = LightingConfig::default();
        let scene = Scene { mesh, lighting: &lighting, reflection: &DEFAULT_REFLECTION_CONSTANTS, back_face_culling: culling };
        let mut picture = Picture::new(40, 40, BLACK);
        let mut depth = DepthBuffer::new(40, 40);
        let drawn = render_polygons(&scene, &mut picture, &mut depth, WHITE, mode);
        (drawn, picture, depth)
    }

    #[test]
    fn projection_maps_unit_cube_onto_picture() {
        assert_eq!(project(&[-1.0, -1.0, -1.0], 100, 50), [0.0, 0.0, 0.0]);
        assert_eq!(project(&[1.0, 1.0, 1.0], 100, 50), [100.0, 50.0, DEPTH_RESOLUTION]);
        assert_eq!(project(&[0.0, 0.0, 0.0], 100, 50), [50.0, 25.0, DEPTH_RESOLUTION / 2.0]);
    }

    #[test]
    fn every_mode_draws_a_front_face() {
        for mode in [
            ShadingMode::Wireframe,
            ShadingMode::FlatRandom,
            ShadingMode::Flat,
            ShadingMode::Lit,
            ShadingMode::DepthTested,
        ] {
            let (drawn, picture, _) = render(&front_and_back(), true, mode);
            assert_eq!(drawn, 1, "{:?}", mode);
            assert!(picture.drawn_pixels() > 0 || mode == ShadingMode::FlatRandom, "{:?}", mode);
        }
    }

    #[test]
    fn culling_off_draws_back_faces_too() {
        let (drawn, _, _) = render(&front_and_back(), false, ShadingMode::Flat);
        assert_eq!(drawn, 2);
    }

    #[test]
    fn nearer_face_wins_the_depth_test() {
        let (_, _, depth) = render(&front_and_back(), false, ShadingMode::DepthTested);

        // the second face sits at z = 0.5, projected to (0.5 + 1) * 255 / 2
        let z = depth.get(20, 15).unwrap();
        assert!((z - 191.25).abs() < 1e-3, "{}", z);
    }

    #[test]
    fn faces_with_missing_vertices_are_skipped() {
        let mesh = Mesh { vertices: vec![[0.0, 0.0, 0.0]], faces: vec![[0, 1, 2]] };
        let (drawn, picture, _) = render(&mesh, false, ShadingMode::Flat);
        assert_eq!(drawn, 0);
        assert_eq!(picture.drawn_pixels(), 0);
    }
}
