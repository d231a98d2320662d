#[derive(Clone, Debug)]
pub struct Token {
    pub value: String,
    pub token_type: TokenType,
    pub line: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenType {
    Command(Function),
    Number,
    FilePath,
    Identifier,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Function {
    // GENERAL
    Size,
    Background,
    Color,
    Display,
    Save,
    SaveDepth,
    Clear,

    // DRAWING
    Line,
    Triangle,
    Fill,

    // MESHES
    Mesh,
    Render,
    SetShading,
    SetCulling,

    // LIGHTING
    AddLight,
    ClearLights,
    SetAmbient,
    SetConstants,
}
