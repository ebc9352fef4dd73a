mod shader;

pub use shader::{load_shader_source, parse_shader_source, ShaderSource};
