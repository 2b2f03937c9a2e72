use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Vertex-stage uniform block: model/view/projection.
///
/// Matrix convention: `glam` and WGSL are both column-major, so matrices are
/// uploaded without any transpose. This is the only place CPU math meets GPU
/// memory layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SceneUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
}

impl SceneUniform {
    pub fn new(model: Mat4, view: Mat4, proj: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
        }
    }
}

/// Fragment-stage uniform block: tint color + texture blend.
///
/// `blend[0]` is the dual-texture mix factor; the remaining lanes pad the
/// block to a 16-byte multiple.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct TintUniform {
    pub color: [f32; 4],
    pub blend: [f32; 4],
}

impl TintUniform {
    pub fn new(color: [f32; 4], blend: f32) -> Self {
        Self {
            color,
            blend: [blend, 0.0, 0.0, 0.0],
        }
    }
}

/// Returns the `wgpu` minimum binding size for a uniform block.
///
/// Uniform structs are non-empty `repr(C)` records, so their size is always
/// non-zero. Centralising this avoids `.unwrap()` at each pipeline-creation
/// site.
pub fn uniform_binding_size<U: Pod>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<U>() as u64)
        .expect("uniform blocks have non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn uniform_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<SceneUniform>(), 192);
        assert_eq!(std::mem::size_of::<TintUniform>(), 32);
        assert_eq!(std::mem::size_of::<SceneUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<TintUniform>() % 16, 0);
    }

    #[test]
    fn binding_size_matches_struct_size() {
        assert_eq!(uniform_binding_size::<SceneUniform>().get(), 192);
        assert_eq!(uniform_binding_size::<TintUniform>().get(), 32);
    }

    #[test]
    fn matrices_upload_column_major() {
        let translation = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = SceneUniform::new(translation, Mat4::IDENTITY, Mat4::IDENTITY);
        // Translation lives in the fourth column for column-major storage.
        assert_eq!(u.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(Vec4::from_array(u.model[0]), Vec4::X);
    }

    #[test]
    fn blend_factor_occupies_first_lane() {
        let u = TintUniform::new([0.5, 0.0, 0.0, 1.0], 0.5);
        assert_eq!(u.blend, [0.5, 0.0, 0.0, 0.0]);
    }
}
