use crate::types::{MeshData, Vertex};

/// Build the handful of colored objects the demo draws.
///
/// Everything sits at negative Z, inside the view frustum of the camera's
/// starting pose (origin, zero rotation), at staggered depths so translation
/// and look rotation both read clearly. There is no depth buffer; later
/// entries draw over earlier ones.
pub fn demo_scene() -> Vec<MeshData> {
    vec![
        MeshData {
            label: "far wall",
            vertices: quad(-4.0, -2.0, -50.0, 8.0, 5.0),
            color: [0.18, 0.32, 0.55, 1.0],
        },
        MeshData {
            label: "mid steps",
            vertices: vec![
                Vertex::new(0.0, 0.0, -20.0),
                Vertex::new(1.0, 0.0, -20.0),
                Vertex::new(1.0, 1.0, -20.0),
                Vertex::new(0.0, 0.1, -20.0),
                Vertex::new(0.0, 1.1, -20.0),
                Vertex::new(1.0, 1.1, -20.0),
            ],
            color: [0.85, 0.55, 0.15, 1.0],
        },
        MeshData {
            label: "near wedge",
            vertices: vec![
                Vertex::new(0.0, 0.0, -3.0),
                Vertex::new(-1.0, 1.0, -3.0),
                Vertex::new(-0.5, 0.0, -3.0),
            ],
            color: [0.75, 0.2, 0.25, 1.0],
        },
        MeshData {
            label: "left marker",
            vertices: vec![
                Vertex::new(-3.0, -0.5, -10.0),
                Vertex::new(-2.0, -0.5, -10.0),
                Vertex::new(-2.5, 0.8, -10.0),
            ],
            color: [0.25, 0.7, 0.35, 1.0],
        },
        MeshData {
            label: "right marker",
            vertices: vec![
                Vertex::new(2.0, -0.5, -14.0),
                Vertex::new(3.0, -0.5, -14.0),
                Vertex::new(2.5, 0.8, -14.0),
            ],
            color: [0.7, 0.65, 0.2, 1.0],
        },
    ]
}

/// Axis-aligned quad in the XY plane at depth `z`, as two triangles
fn quad(x: f32, y: f32, z: f32, width: f32, height: f32) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, z),
        Vertex::new(x + width, y, z),
        Vertex::new(x + width, y + height, z),
        Vertex::new(x, y, z),
        Vertex::new(x + width, y + height, z),
        Vertex::new(x, y + height, z),
    ]
}
