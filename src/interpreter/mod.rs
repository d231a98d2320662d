mod lexer;
mod tokens;
mod parser;
mod run_script;
pub mod mesh;

use std::{
    error::Error,
    collections::HashMap,
    sync::LazyLock,
    io::{self, BufRead},
    fs::File,
    path::Path,
};

use parser::Parser;
use run_script::evaluate_commands;
use tokens::{TokenType, Function};

static KEYWORDS: LazyLock<HashMap<&str, TokenType>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("size", TokenType::Command(Function::Size));
    map.insert("background", TokenType::Command(Function::Background));
    map.insert("color", TokenType::Command(Function::Color));
    map.insert("display", TokenType::Command(Function::Display));
    map.insert("save", TokenType::Command(Function::Save));
    map.insert("save_depth", TokenType::Command(Function::SaveDepth));
    map.insert("clear", TokenType::Command(Function::Clear));

    map.insert("line", TokenType::Command(Function::Line));
    map.insert("triangle", TokenType::Command(Function::Triangle));
    map.insert("fill", TokenType::Command(Function::Fill));

    map.insert("mesh", TokenType::Command(Function::Mesh));
    map.insert("render", TokenType::Command(Function::Render));
    map.insert("shading", TokenType::Command(Function::SetShading));
    map.insert("culling", TokenType::Command(Function::SetCulling));

    map.insert("light", TokenType::Command(Function::AddLight));
    map.insert("clear_lights", TokenType::Command(Function::ClearLights));
    map.insert("ambient", TokenType::Command(Function::SetAmbient));
    map.insert("constants", TokenType::Command(Function::SetConstants));

    map
});

pub fn run_script(path: &str) -> Result<(), Box<dyn Error>> {
    let tokens = lexer::tokenize(path, &KEYWORDS)?;

    let commands = Parser::new(path).generate_command_list(tokens)?;
    log::debug!("{}: {} commands", path, commands.len());

    evaluate_commands(commands)?;

    Ok(())
}

fn read_lines<P>(file_path: P) -> io::Result<io::Lines<io::BufReader<File>>>
where P: AsRef<Path> {
    let file = File::open(file_path)?;
    Ok(io::BufReader::new(file).lines())
}
