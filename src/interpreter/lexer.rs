use std::{
    error::Error,
    collections::{HashMap, VecDeque},
};

use regex::Regex;
use super::{tokens::{Token, TokenType}, read_lines};

pub fn tokenize(path: &str, keywords: &HashMap<&str, TokenType>) -> Result<VecDeque<Token>, Box<dyn Error>> {
    let lines = read_lines(path).map_err(|_| format!("Script '{}' not found", path))?;
    let source = lines
        .enumerate()
        .map(|(line_number, line)| line.map_err(|e| format!("{}:{} {}", path, line_number + 1, e)))
        .collect::<Result<Vec<String>, String>>()?;

    tokenize_lines(path, source.iter().map(String::as_str), keywords)
}

pub fn tokenize_lines<'a>(
    path: &str,
    lines: impl Iterator<Item = &'a str>,
    keywords: &HashMap<&str, TokenType>,
) -> Result<VecDeque<Token>, Box<dyn Error>> {
    let token_regex = Regex::new(r"(?x)
        (?P<Comment>//) |
        (?P<WhiteSpace> \s+) |
        (?P<FilePath>/?(?:\./|\.\./|[A-Za-z0-9_\-]+/)*[A-Za-z0-9_\-]+\.[A-Za-z][A-Za-z0-9]*) |
        (?P<Number> -?(\d+\.?\d*|\.\d+)) |
        (?P<Identifier> [a-zA-Z_][a-zA-Z0-9_]*) |
        (?P<Unknown> \S)"
    )?;

    let mut tokens: VecDeque<Token> = VecDeque::new();

    for (line_number, line) in lines.enumerate() {
        let line = line.trim();

        for captures in token_regex.captures_iter(line) {
            let (value, token_type) = if captures.name("Comment").is_some() {
                break;
            } else if captures.name("WhiteSpace").is_some() {
                continue;
            } else if let Some(number) = captures.name("Number") {
                (number.as_str(), TokenType::Number)
            } else if let Some(file_path) = captures.name("FilePath") {
                (file_path.as_str(), TokenType::FilePath)
            } else if let Some(identifier) = captures.name("Identifier") {
                let identifier = identifier.as_str();
                (identifier, keywords.get(identifier).copied().unwrap_or(TokenType::Identifier))
            } else {
                let unknown = captures.name("Unknown").map_or("", |m| m.as_str());
                return Err(format!("{}:{} Token not recognized: {}", path, line_number + 1, unknown).into());
            };

            tokens.push_back(Token {
                value: value.to_string(),
                token_type,
                line: line_number + 1,
            });
        }
    }

    Ok(tokens)
}
