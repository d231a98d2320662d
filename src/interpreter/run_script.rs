use std::{
    collections::HashMap, error::Error
};

use crate::{
    constants::{
        DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR, DEFAULT_PICTURE_DIMENSIONS,
        DEFAULT_REFLECTION_CONSTANTS, DEFAULT_SHADING_MODE, ENABLE_BACK_FACE_CULLING, ShadingMode,
    },
    picture::Color,
    render::{
        DepthBuffer,
        LightingConfig,
        Picture,
        ReflectionConstants,
        render_depth_buffer,
        line::draw_line,
        polygon_list::{Scene, render_polygons},
        scan_line::{draw_triangle, fill_triangle},
    },
    vector::normalize_vector,
};
use super::{
    parser::Command,
    mesh::{Mesh, load_mesh},
};

struct ScriptContext {
    picture: Picture,
    depth_buffer: DepthBuffer,
    foreground: Color,
    shading_mode: ShadingMode,
    back_face_culling: bool,
    lighting_config: LightingConfig,
    reflection_constants: ReflectionConstants,
    // path of the mesh that `render` draws, loaded meshes stay cached by path
    current_mesh: Option<String>,
    mesh_cache: HashMap<String, Mesh>,
}

impl ScriptContext {
    fn new() -> Self {
        let (width, height) = DEFAULT_PICTURE_DIMENSIONS;

        Self {
            picture: Picture::new(width, height, DEFAULT_BACKGROUND_COLOR),
            depth_buffer: DepthBuffer::new(width, height),
            foreground: DEFAULT_FOREGROUND_COLOR,
            shading_mode: DEFAULT_SHADING_MODE,
            back_face_culling: ENABLE_BACK_FACE_CULLING,
            lighting_config: LightingConfig::default(),
            reflection_constants: DEFAULT_REFLECTION_CONSTANTS,
            current_mesh: None,
            mesh_cache: HashMap::new(),
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.picture = Picture::new(width, height, self.picture.background);
        self.depth_buffer = DepthBuffer::new(width, height);
    }

    fn clear(&mut self) {
        self.picture.clear();
        self.depth_buffer.clear();
    }

    fn load_mesh(&mut self, file_path: String) -> Result<(), Box<dyn Error>> {
        if !self.mesh_cache.contains_key(&file_path) {
            let mesh = load_mesh(&file_path)?;
            self.mesh_cache.insert(file_path.clone(), mesh);
        }

        self.current_mesh = Some(file_path);
        Ok(())
    }

    fn render_mesh(&mut self) -> Result<usize, Box<dyn Error>> {
        let Some(mesh) = self.current_mesh.as_ref().and_then(|path| self.mesh_cache.get(path)) else {
            return Err("'render' needs a mesh, load one with 'mesh' first".into());
        };

        let scene = Scene {
            mesh,
            lighting: &self.lighting_config,
            reflection: &self.reflection_constants,
            back_face_culling: self.back_face_culling,
        };

        Ok(render_polygons(&scene, &mut self.picture, &mut self.depth_buffer, self.foreground, self.shading_mode))
    }
}

pub fn evaluate_commands(commands: Vec<Command>) -> Result<(), Box<dyn Error>> {
    let mut context = ScriptContext::new();

    for command in commands {
        execute_command(command, &mut context)?;
    }

    Ok(())
}

fn execute_command(command: Command, context: &mut ScriptContext) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Size { width, height } => {
            context.resize(width, height);
        }

        Command::Background { r, g, b } => {
            context.picture.background = Color::rgb(r, g, b);
            context.picture.clear();
        }

        Command::Color { r, g, b } => {
            context.foreground = Color::rgb(r, g, b);
        }

        Command::Display => {
            context.picture.display()?
        }

        Command::Save { file_path } => {
            context.picture.save_as_file(&file_path)?;
            println!("Saved '{}'.", file_path);
        }

        Command::SaveDepth { file_path } => {
            render_depth_buffer(&context.depth_buffer, &file_path)?;
            println!("Saved '{}'.", file_path);
        }

        Command::Clear => {
            context.clear();
        }

        Command::Line { x0, y0, x1, y1 } => {
            draw_line([x0, y0], [x1, y1], &mut context.picture, context.foreground);
        }

        Command::Triangle { x0, y0, x1, y1, x2, y2 } => {
            draw_triangle([x0, y0], [x1, y1], [x2, y2], &mut context.picture, context.foreground);
        }

        Command::Fill { x0, y0, x1, y1, x2, y2 } => {
            if !fill_triangle([x0, y0], [x1, y1], [x2, y2], &mut context.picture, context.foreground) {
                log::debug!("fill ({}, {}) ({}, {}) ({}, {}) drew nothing", x0, y0, x1, y1, x2, y2);
            }
        }

        Command::Mesh { file_path } => {
            context.load_mesh(file_path)?;
        }

        Command::Render => {
            let faces = context.render_mesh()?;
            log::debug!("render: {} faces drawn, {} pixels lit", faces, context.picture.drawn_pixels());
        }

        Command::SetShading { shading_mode } => {
            context.shading_mode = shading_mode;
        }

        Command::SetCulling { enabled } => {
            context.back_face_culling = enabled;
        }

        Command::AddLight { r, g, b, x, y, z } => {
            context.lighting_config.point_lights.push([[r, g, b], normalize_vector(&[x, y, z])]);
        }

        Command::ClearLights => {
            context.lighting_config.point_lights.clear();
        }

        Command::SetAmbient { r, g, b } => {
            context.lighting_config.ambient_light_color = [r, g, b];
        }

        Command::SetConstants { kar, kdr, ksr, kag, kdg, ksg, kab, kdb, ksb } => {
            context.reflection_constants = ReflectionConstants {
                ambient: [kar, kag, kab],
                diffuse: [kdr, kdg, kdb],
                specular: [ksr, ksg, ksb],
            };
        }
    }

    Ok(())
}
