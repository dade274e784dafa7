//! Face mapping and face-up resolution
//!
//! A die face is identified by the index of its outward normal in the
//! canonical order +X, -X, +Y, -Y, +Z, -Z. Each index maps to the pip value
//! printed on that face; opposite faces sum to 7 per standard die convention.

use nalgebra::{UnitQuaternion, Vector3};

/// Number of faces on the cube
pub const FACE_COUNT: usize = 6;

/// Pip printed on each face, indexed in canonical normal order
pub const PIPS_BY_FACE: [u8; FACE_COUNT] = [3, 4, 1, 6, 2, 5];

/// Outward face normals in the body's local frame, canonical order
pub fn local_face_normals() -> [Vector3<f32>; FACE_COUNT] {
    [
        Vector3::x(),
        -Vector3::x(),
        Vector3::y(),
        -Vector3::y(),
        Vector3::z(),
        -Vector3::z(),
    ]
}

/// Index of the face whose world-space normal points most nearly up.
///
/// Rotates each local normal by the body orientation and takes the maximum
/// dot product with world up. The strict comparison resolves exact ties to
/// the first face in canonical order.
pub fn top_face_index(orientation: &UnitQuaternion<f32>) -> usize {
    let up = Vector3::y();
    let mut best_dot = f32::NEG_INFINITY;
    let mut best = 0;
    for (i, normal) in local_face_normals().iter().enumerate() {
        let d = orientation.transform_vector(normal).dot(&up);
        if d > best_dot {
            best_dot = d;
            best = i;
        }
    }
    best
}

/// Pip value printed on the given face index.
#[inline]
pub fn pip_value(face: usize) -> u8 {
    PIPS_BY_FACE[face]
}
