use anyhow::{bail, Context, Result};
use std::path::Path;

/// Vertex and fragment stage sources split out of a single shader file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    /// Join both stages back into one module for the GPU backend.
    ///
    /// WGSL carries every entry point in a single module, so the renderer
    /// compiles the concatenation rather than two separate blobs.
    pub fn combined_module(&self) -> String {
        format!("{}\n{}", self.vertex, self.fragment)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    None,
    Vertex,
    Fragment,
}

/// Split a combined shader file into its vertex and fragment stages.
///
/// Stages are demarcated by marker lines containing `#shader vertex` or
/// `#shader fragment`. Lines before the first marker are ignored. A source
/// missing either stage is an error.
pub fn parse_shader_source(source: &str) -> Result<ShaderSource> {
    let mut vertex = String::new();
    let mut fragment = String::new();
    let mut stage = Stage::None;

    for line in source.lines() {
        if line.contains("#shader") {
            if line.contains("vertex") {
                stage = Stage::Vertex;
            } else if line.contains("fragment") {
                stage = Stage::Fragment;
            } else {
                bail!("unknown shader stage marker: {line:?}");
            }
            continue;
        }

        match stage {
            Stage::None => {}
            Stage::Vertex => {
                vertex.push_str(line);
                vertex.push('\n');
            }
            Stage::Fragment => {
                fragment.push_str(line);
                fragment.push('\n');
            }
        }
    }

    if vertex.trim().is_empty() {
        bail!("shader source has no vertex stage");
    }
    if fragment.trim().is_empty() {
        bail!("shader source has no fragment stage");
    }

    Ok(ShaderSource { vertex, fragment })
}

/// Read a shader file from disk and split it into stages.
pub fn load_shader_source(path: &Path) -> Result<ShaderSource> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader file {}", path.display()))?;
    parse_shader_source(&source)
        .with_context(|| format!("failed to parse shader file {}", path.display()))
}
