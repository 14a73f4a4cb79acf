use cgmath::{Matrix4, SquareMatrix, Vector3};

/// What picking needs from a camera: where it sits and how it projects.
///
/// Host engines with their own camera types implement this to feed
/// [`ray_from_ndc`](crate::gfx::picking::ray_from_ndc).
pub trait Camera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;

    /// Eye position in world space
    fn eye(&self) -> Vector3<f32>;

    /// Inverse view-projection, falling back to identity for degenerate cameras
    fn inverse_view_projection(&self) -> Matrix4<f32> {
        self.build_view_projection_matrix()
            .invert()
            .unwrap_or(Matrix4::identity())
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}
