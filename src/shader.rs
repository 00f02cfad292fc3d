//! Render shader and the CPU-side vertex layout it consumes.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::integrator::TrajectoryPoint;
use crate::scene::Scene;

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Length of each coordinate axis line.
pub const AXIS_LENGTH: f32 = 50.0;

/// Axis labels and the points they are drawn at.
pub const AXIS_LABELS: [(&str, Vec3); 3] = [
    ("X", Vec3::new(AXIS_LENGTH, 0.0, 0.0)),
    ("Y", Vec3::new(0.0, AXIS_LENGTH, 0.0)),
    ("Z", Vec3::new(0.0, 0.0, AXIS_LENGTH)),
];

/// One colored, homogeneous vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    fn solid(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            color: color.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

/// Integrate the scene's trajectory into `out`, replacing its contents.
pub fn build_trajectory(scene: &Scene, out: &mut Vec<Vertex>) {
    out.clear();
    out.extend(scene.trajectory().map(|point: TrajectoryPoint| Vertex {
        position: point.position.as_vec4().to_array(),
        color: scene
            .color_mapping
            .color(point.derivative, scene.mode)
            .to_array(),
    }));
}

/// White line pairs from the origin along each axis.
pub fn axis_vertices() -> [Vertex; 6] {
    let origin = Vertex::solid(Vec3::ZERO, Vec3::ONE);
    let [x, y, z] = AXIS_LABELS.map(|(_, tip)| Vertex::solid(tip, Vec3::ONE));
    [origin, x, origin, y, origin, z]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::STEP_COUNT;
    use crate::mode::DisplayMode;
    use crate::visuals::ColorMapping;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_shader_validates() {
        validate_wgsl(SHADER_SOURCE).unwrap();
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
        assert_eq!(Vertex::layout().array_stride, 28);
        assert_eq!(std::mem::size_of::<Uniforms>(), 64);
    }

    #[test]
    fn test_build_trajectory_replaces_contents() {
        let scene = Scene::default();
        let mut vertices = vec![Vertex::zeroed(); 3];
        build_trajectory(&scene, &mut vertices);
        assert_eq!(vertices.len(), STEP_COUNT);

        let first = scene.trajectory().next().unwrap();
        assert_eq!(vertices[0].position, first.position.as_vec4().to_array());
        assert_eq!(
            vertices[0].color,
            ColorMapping::Speed.color(first.derivative, DisplayMode::ThreeD).to_array()
        );
    }

    #[test]
    fn test_build_trajectory_is_repeatable() {
        let mut scene = Scene::default();
        scene.mode = DisplayMode::FourD;
        let (mut a, mut b) = (Vec::new(), Vec::new());
        build_trajectory(&scene, &mut a);
        build_trajectory(&scene, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_axes_start_at_origin() {
        let axes = axis_vertices();
        for pair in axes.chunks(2) {
            assert_eq!(pair[0].position, [0.0, 0.0, 0.0, 1.0]);
            assert_eq!(pair[1].color, [1.0, 1.0, 1.0]);
        }
        assert_eq!(axes[5].position, [0.0, 0.0, AXIS_LENGTH, 1.0]);
    }
}
