use std::{
    collections::VecDeque, error::Error
};

use crate::constants::{MAX_PICTURE_PIXELS, ShadingMode};
use super::tokens::{Token, TokenType, Function};

// file paths stored as String, pixel coordinates as isize
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Size { width: usize, height: usize },
    Background { r: u8, g: u8, b: u8 },
    Color { r: u8, g: u8, b: u8 },
    Display,
    Save { file_path: String },
    SaveDepth { file_path: String },
    Clear,
    Line { x0: isize, y0: isize, x1: isize, y1: isize },
    Triangle { x0: isize, y0: isize, x1: isize, y1: isize, x2: isize, y2: isize },
    Fill { x0: isize, y0: isize, x1: isize, y1: isize, x2: isize, y2: isize },
    Mesh { file_path: String },
    Render,
    SetShading { shading_mode: ShadingMode },
    SetCulling { enabled: bool },
    AddLight { r: f32, g: f32, b: f32, x: f32, y: f32, z: f32 },
    ClearLights,
    SetAmbient { r: f32, g: f32, b: f32 },
    SetConstants { kar: f32, kdr: f32, ksr: f32, kag: f32, kdg: f32, ksg: f32, kab: f32, kdb: f32, ksb: f32 },
}

pub struct Parser {
    path: String,
    stack: VecDeque<Token>,
    // line of the command being parsed, for errors once the stack runs dry
    line: usize,
}

impl Parser {
    pub fn new(path: &str) -> Self {
        Self { path: path.to_string(), stack: VecDeque::new(), line: 0 }
    }

    fn error(&self, message: String) -> Box<dyn Error> {
        format!("{}:{} {}", self.path, self.line, message).into()
    }

    fn pop(&mut self) -> Result<Token, Box<dyn Error>> {
        match self.stack.pop_front() {
            Some(token) => Ok(token),
            None => Err(self.error("Expected token but the script ended.".to_string())),
        }
    }

    fn pop_type(&mut self, token_type: TokenType) -> Result<Token, Box<dyn Error>> {
        let token = self.pop()?;

        if token.token_type != token_type || token.line != self.line {
            return Err(self.error(format!("Expected {:?} but found '{}'.", token_type, token.value)));
        }

        Ok(token)
    }

    fn pop_f32(&mut self) -> Result<f32, Box<dyn Error>> {
        let token = self.pop_type(TokenType::Number)?;
        token.value.parse::<f32>().map_err(|_| self.error(format!("Invalid number '{}'.", token.value)))
    }

    fn pop_isize(&mut self) -> Result<isize, Box<dyn Error>> {
        let token = self.pop_type(TokenType::Number)?;
        token.value.parse::<isize>().map_err(|_| self.error(format!("Expected an integer but found '{}'.", token.value)))
    }

    fn pop_usize(&mut self) -> Result<usize, Box<dyn Error>> {
        let token = self.pop_type(TokenType::Number)?;
        token.value.parse::<usize>().map_err(|_| self.error(format!("Expected a positive integer but found '{}'.", token.value)))
    }

    fn pop_channel(&mut self) -> Result<u8, Box<dyn Error>> {
        let token = self.pop_type(TokenType::Number)?;
        token.value.parse::<u8>().map_err(|_| self.error(format!("Color channel '{}' is not in [0, 255].", token.value)))
    }

    fn pop_path(&mut self) -> Result<String, Box<dyn Error>> {
        Ok(self.pop_type(TokenType::FilePath)?.value)
    }

    fn pop_identifier(&mut self) -> Result<String, Box<dyn Error>> {
        Ok(self.pop_type(TokenType::Identifier)?.value)
    }

    pub fn generate_command_list(&mut self, tokens: VecDeque<Token>) -> Result<Vec<Command>, Box<dyn Error>> {
        let mut commands: Vec<Command> = vec![];
        self.stack = tokens;

        while let Some(token) = self.stack.pop_front() {
            self.line = token.line;

            let TokenType::Command(function) = token.token_type else {
                return Err(self.error(format!("Expected a command but found '{}'.", token.value)));
            };

            let command = match function {
                Function::Size => {
                    let width = self.pop_usize()?;
                    let height = self.pop_usize()?;
                    if width == 0 || height == 0 {
                        return Err(self.error(format!("Picture size {}x{} is empty.", width, height)));
                    }
                    if width.checked_mul(height).is_none_or(|pixels| pixels > MAX_PICTURE_PIXELS) {
                        return Err(self.error(format!("Picture size {}x{} is too large.", width, height)));
                    }
                    Command::Size { width, height }
                }
                Function::Background => Command::Background { r: self.pop_channel()?, g: self.pop_channel()?, b: self.pop_channel()? },
                Function::Color => Command::Color { r: self.pop_channel()?, g: self.pop_channel()?, b: self.pop_channel()? },
                Function::Display => Command::Display,
                Function::Save => Command::Save { file_path: self.pop_path()? },
                Function::SaveDepth => Command::SaveDepth { file_path: self.pop_path()? },
                Function::Clear => Command::Clear,
                Function::Line => Command::Line {
                    x0: self.pop_isize()?, y0: self.pop_isize()?,
                    x1: self.pop_isize()?, y1: self.pop_isize()?,
                },
                Function::Triangle => Command::Triangle {
                    x0: self.pop_isize()?, y0: self.pop_isize()?,
                    x1: self.pop_isize()?, y1: self.pop_isize()?,
                    x2: self.pop_isize()?, y2: self.pop_isize()?,
                },
                Function::Fill => Command::Fill {
                    x0: self.pop_isize()?, y0: self.pop_isize()?,
                    x1: self.pop_isize()?, y1: self.pop_isize()?,
                    x2: self.pop_isize()?, y2: self.pop_isize()?,
                },
                Function::Mesh => Command::Mesh { file_path: self.pop_path()? },
                Function::Render => Command::Render,
                Function::SetShading => {
                    let shading_mode = match self.pop_identifier()?.as_str() {
                        "wireframe" => ShadingMode::Wireframe,
                        "random" => ShadingMode::FlatRandom,
                        "flat" => ShadingMode::Flat,
                        "lit" => ShadingMode::Lit,
                        "depth" => ShadingMode::DepthTested,
                        other => return Err(self.error(format!("Unknown shading mode '{}'.", other))),
                    };
                    Command::SetShading { shading_mode }
                }
                Function::SetCulling => {
                    let enabled = match self.pop_identifier()?.as_str() {
                        "on" => true,
                        "off" => false,
                        other => return Err(self.error(format!("Culling is 'on' or 'off', not '{}'.", other))),
                    };
                    Command::SetCulling { enabled }
                }
                Function::AddLight => Command::AddLight {
                    r: self.pop_f32()?, g: self.pop_f32()?, b: self.pop_f32()?,
                    x: self.pop_f32()?, y: self.pop_f32()?, z: self.pop_f32()?,
                },
                Function::ClearLights => Command::ClearLights,
                Function::SetAmbient => Command::SetAmbient { r: self.pop_f32()?, g: self.pop_f32()?, b: self.pop_f32()? },
                Function::SetConstants => Command::SetConstants {
                    kar: self.pop_f32()?, kdr: self.pop_f32()?, ksr: self.pop_f32()?,
                    kag: self.pop_f32()?, kdg: self.pop_f32()?, ksg: self.pop_f32()?,
                    kab: self.pop_f32()?, kdb: self.pop_f32()?, ksb: self.pop_f32()?,
                },
            };

            commands.push(command);
        }

        Ok(commands)
    }
}
