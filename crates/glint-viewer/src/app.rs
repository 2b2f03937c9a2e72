use anyhow::{Context, Result};
use glam::{Mat4, Vec3};

use glint_engine::camera::Camera;
use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::input::Key;
use glint_engine::render::{QuadConfig, QuadRenderer, RenderCtx};
use glint_engine::shader::{SceneUniform, TintUniform};

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.2,
    b: 0.4,
    a: 1.0,
};

/// Time-varying tint written to the fragment uniform each frame.
fn pulse_color(t: f32) -> [f32; 4] {
    [0.5 + 0.5 * t.sin(), 0.0, 0.0, 1.0]
}

/// The viewer application: one textured quad, a first-person camera.
pub struct ViewerApp {
    config: QuadConfig,
    pulse: bool,
    camera: Camera,
    renderer: Option<QuadRenderer>,
}

impl ViewerApp {
    pub fn new(config: QuadConfig, pulse: bool) -> Self {
        Self {
            config,
            pulse,
            // Start a few units back so the quad is in view.
            camera: Camera::new(Vec3::new(0.0, 0.0, 3.0), 800.0 / 600.0),
            renderer: None,
        }
    }
}

impl App for ViewerApp {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let renderer = QuadRenderer::new(ctx.device, ctx.queue, ctx.surface_format, &self.config)
            .context("failed to build quad renderer")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        let Some(renderer) = self.renderer.as_ref() else {
            // on_init did not run; nothing can be drawn.
            return AppControl::Exit;
        };

        self.camera.set_aspect(ctx.window.aspect_ratio());
        self.camera.update(ctx.input, ctx.input_frame, ctx.time.dt);

        let scene = SceneUniform::new(
            Mat4::IDENTITY,
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
        );

        let color = if self.pulse {
            pulse_color(ctx.time.elapsed)
        } else {
            [1.0, 1.0, 1.0, 1.0]
        };
        let tint = TintUniform::new(color, renderer.blend_factor());

        ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.render(rctx, target, &scene, &tint);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_starts_at_half_red() {
        assert_eq!(pulse_color(0.0), [0.5, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn pulse_stays_in_unit_range() {
        let mut t = 0.0f32;
        while t < 20.0 {
            let [r, ..] = pulse_color(t);
            assert!((0.0..=1.0).contains(&r));
            t += 0.37;
        }
    }
}
