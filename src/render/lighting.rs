type Vector = [f32; 3];

use crate::{
    constants::{DEFAULT_AMBIENT_LIGHT_COLOR, DEFAULT_POINT_LIGHT, SPECULAR_EXPONENT},
    picture::Color,
    vector::{dot_product, normalize_vector},
};

#[derive(Clone, Debug)]
pub struct LightingConfig {
    pub ambient_light_color: Vector,
    // [color, direction towards the light]
    pub point_lights: Vec<[Vector; 2]>,
    // note: the viewer is always <0, 0, 1> so the specular math only needs the z component
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_light_color: DEFAULT_AMBIENT_LIGHT_COLOR,
            point_lights: vec![[DEFAULT_POINT_LIGHT[0], normalize_vector(&DEFAULT_POINT_LIGHT[1])]],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReflectionConstants {
    pub ambient: Vector,
    pub diffuse: Vector,
    pub specular: Vector,
}

/// Flat illumination of one face with the given normal.
pub fn get_illumination(normal: &Vector, config: &LightingConfig, constants: &ReflectionConstants) -> Color {
    let normal = &normalize_vector(normal);

    let ambient = get_ambient(&config.ambient_light_color, &constants.ambient);
    let diffuse = get_diffuse(normal, &config.point_lights, &constants.diffuse);
    let specular = get_specular(normal, &config.point_lights, &constants.specular);

    clamp_color([
        ambient[0] + diffuse[0] + specular[0],
        ambient[1] + diffuse[1] + specular[1],
        ambient[2] + diffuse[2] + specular[2],
    ])
}

pub fn get_ambient(ambient_light_color: &Vector, ambient_constant: &Vector) -> Vector {
    // i_ambient = ambient color * ambient reflection constant
    [
        ambient_light_color[0] * ambient_constant[0],
        ambient_light_color[1] * ambient_constant[1],
        ambient_light_color[2] * ambient_constant[2],
    ]
}

pub fn get_diffuse(normal: &Vector, point_lights: &[[Vector; 2]], diffuse_constant: &Vector) -> Vector {
    // i_diffuse = light color * diffuse reflection constant * (normal dot light)
    let mut diffuse = [0.0, 0.0, 0.0];
    for [light_color, light_vector] in point_lights {
        let n_dot_l = f32::max(0.0, dot_product(normal, light_vector));
        diffuse[0] += light_color[0] * diffuse_constant[0] * n_dot_l;
        diffuse[1] += light_color[1] * diffuse_constant[1] * n_dot_l;
        diffuse[2] += light_color[2] * diffuse_constant[2] * n_dot_l;
    }
    diffuse
}

pub fn get_specular(normal: &Vector, point_lights: &[[Vector; 2]], specular_constant: &Vector) -> Vector {
    // i_specular = light color * specular reflection constant * (reflection dot view)^exp
    // reflection = 2 * normal * (normal dot light) - light, and only its z survives the dot with <0, 0, 1>
    let mut specular = [0.0, 0.0, 0.0];
    for [light_color, light_vector] in point_lights {
        let n_dot_l = f32::max(0.0, dot_product(normal, light_vector));
        let r_z = f32::max(0.0, 2.0 * normal[2] * n_dot_l - light_vector[2]).powf(SPECULAR_EXPONENT);

        specular[0] += light_color[0] * specular_constant[0] * r_z;
        specular[1] += light_color[1] * specular_constant[1] * r_z;
        specular[2] += light_color[2] * specular_constant[2] * r_z;
    }
    specular
}

fn clamp_color(vector: Vector) -> Color {
    Color::rgb(
        vector[0].clamp(0.0, 255.0) as u8,
        vector[1].clamp(0.0, 255.0) as u8,
        vector[2].clamp(0.0, 255.0) as u8,
    )
}
