use super::read_lines;
use stl_io::read_stl;
use std::{error::Error, fs::OpenOptions, path::Path};

type Vector = [f32; 3];

/// Triangle mesh in model space, every coordinate roughly in [-1, 1].
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vector>,
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }
}

pub fn load_mesh(file_path: &str) -> Result<Mesh, Box<dyn Error>> {
    let file = Path::new(file_path);

    if !file.exists() {
        return Err(format!("Mesh file '{}' not found", file_path).into());
    }

    let extension = file
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let mesh = match extension.as_str() {
        "obj" => parse_obj(file_path)?,
        "stl" => parse_stl(file_path)?,
        _ => return Err(format!("Mesh file extension '.{}' not supported", extension).into()),
    };

    log::debug!("loaded {}: {} vertices, {} faces", file_path, mesh.vertices.len(), mesh.face_count());

    Ok(mesh)
}

fn parse_obj(file_path: &str) -> Result<Mesh, Box<dyn Error>> {
    let mut mesh = Mesh::default();

    for (line_number, line) in read_lines(file_path)?.enumerate() {
        let line = line.map_err(|e| format!("{}:{} {}", file_path, line_number + 1, e))?;
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let location = || format!("{}:{}", file_path, line_number + 1);
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts[0] {
            "v" => {
                if parts.len() < 4 {
                    return Err(format!("{} Vertex needs three coordinates", location()).into());
                }

                let mut vertex = [0.0; 3];
                for (coordinate, part) in vertex.iter_mut().zip(&parts[1..4]) {
                    *coordinate = part
                        .parse()
                        .map_err(|_| format!("{} Invalid coordinate '{}'", location(), part))?;
                }
                mesh.vertices.push(vertex);
            }
            "f" => {
                if parts.len() < 4 {
                    return Err(format!("{} Face needs at least three vertices", location()).into());
                }

                let indices = parts[1..]
                    .iter()
                    .map(|part| resolve_index(part, mesh.vertices.len()).map_err(|e| format!("{} {}", location(), e)))
                    .collect::<Result<Vec<usize>, String>>()?;

                // polygons are fanned out from their first vertex, which splits quads in two
                for i in 1..indices.len() - 1 {
                    mesh.faces.push([indices[0], indices[i], indices[i + 1]]);
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

// accepts v, v/vt, v//vn and v/vt/vn, 1-based or negative (counted back from the last vertex)
fn resolve_index(part: &str, vertex_count: usize) -> Result<usize, String> {
    let raw = part.split('/').next().unwrap_or("");
    let index: isize = raw.parse().map_err(|_| format!("Invalid vertex index '{}'", part))?;

    let resolved = if index > 0 {
        index - 1
    } else {
        vertex_count as isize + index
    };

    if index == 0 || resolved < 0 || resolved as usize >= vertex_count {
        return Err(format!("Vertex index {} out of range (mesh has {} vertices)", index, vertex_count));
    }

    Ok(resolved as usize)
}

fn parse_stl(file_path: &str) -> Result<Mesh, Box<dyn Error>> {
    let mut file = OpenOptions::new().read(true).open(file_path)?;
    let stl = read_stl(&mut file).map_err(|e| format!("Couldn't read '{}': {}", file_path, e))?;

    let vertices = stl.vertices.iter().map(|v| [v[0], v[1], v[2]]).collect();
    let faces = stl
        .faces
        .iter()
        .map(|face| face.vertices)
        .collect();

    Ok(Mesh { vertices, faces })
}
