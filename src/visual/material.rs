use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderType};
use bevy::shader::ShaderRef;
use bevy::sprite_render::{AlphaMode2d, Material2d, Material2dPlugin};

/// Gaussian blur sigma of the glow, in logical pixels
pub const BLUR_SIGMA: f32 = 5.0;

/// Extra quad margin around each circle so its halo is not clipped
pub const HALO_WIDTH: f32 = 3.0 * BLUR_SIGMA;

pub struct GlowCircleMaterialPlugin;

impl Plugin for GlowCircleMaterialPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(Material2dPlugin::<GlowCircleMaterial>::default());
    }
}

/// Colour stops of a sweep gradient, evenly spaced around the centre
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Vec2,
    pub colors: [Color; 4],
}

impl SweepGradient {
    /// Cyan, magenta, yellow and back to cyan, closing the loop
    pub fn cmy(center: Vec2) -> Self {
        Self {
            center,
            colors: [
                Color::srgb(0.0, 1.0, 1.0),
                Color::srgb(1.0, 0.0, 1.0),
                Color::srgb(1.0, 1.0, 0.0),
                Color::srgb(0.0, 1.0, 1.0),
            ],
        }
    }

    fn linear_stops(&self) -> [Vec4; 4] {
        self.colors.map(|color| color.to_linear().to_vec4())
    }
}

/// Everything the glow shader needs, in one uniform
#[derive(ShaderType, Debug, Clone)]
pub struct GlowCircleUniform {
    /// Linear RGBA gradient stops
    pub stops: [Vec4; 4],
    /// World-space gradient centre
    pub origin: Vec2,
    pub blur_sigma: f32,
    pub halo_width: f32,
}

/// Material shared by every spiral circle.
///
/// Each circle is a unit quad scaled to `2 * (radius + HALO_WIDTH)`; the shader
/// recovers the radius from the quad size, draws a solid disc, and adds a
/// blurred halo outside it ("solid" blur style).
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlowCircleMaterial {
    #[uniform(0)]
    pub params: GlowCircleUniform,
}

impl GlowCircleMaterial {
    pub fn new(gradient: &SweepGradient) -> Self {
        Self {
            params: GlowCircleUniform {
                stops: gradient.linear_stops(),
                origin: gradient.center,
                blur_sigma: BLUR_SIGMA,
                halo_width: HALO_WIDTH,
            },
        }
    }
}

impl Material2d for GlowCircleMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/glow_circle.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

/// Quad edge length for a circle of `radius`, halo included
pub fn quad_size(radius: f32) -> f32 {
    2.0 * (radius + HALO_WIDTH)
}
