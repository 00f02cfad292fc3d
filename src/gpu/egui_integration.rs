//! Egui text overlay.
//!
//! Only compiled with the `egui` feature. Paints the status lines and the
//! axis labels on top of the scene; it never takes keyboard focus.

use std::sync::Arc;

use glam::Vec2;
use winit::window::Window;

/// Font size of every overlay string, in points.
const FONT_SIZE: f32 = 18.0;
/// Distance of the status lines from the window's lower-left corner.
const MARGIN: f32 = 5.0;

/// Text drawn over one frame.
#[derive(Debug, Default)]
pub struct OverlayText {
    /// Lines anchored at the lower-left corner, bottom line first.
    pub status: Vec<String>,
    /// Labels anchored by their lower-left corner at normalized window
    /// coordinates (0..1, origin top-left).
    pub labels: Vec<(&'static str, Vec2)>,
}

/// Egui context, winit state and wgpu renderer.
pub struct EguiIntegration {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Output from egui frame processing.
pub struct EguiFrameOutput {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
}

impl EguiIntegration {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::dark());

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self { ctx, state, renderer }
    }

    /// Keep egui's view of the window (size, scale factor) current.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        // Nothing in the overlay is interactive, so no event is consumed.
        let _ = self.state.on_window_event(window, event);
    }

    /// Lay out the overlay text and tessellate it.
    pub fn run(&mut self, window: &Window, text: &OverlayText) -> EguiFrameOutput {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| paint(ctx, text));

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        EguiFrameOutput {
            paint_jobs,
            textures_delta: full_output.textures_delta,
        }
    }

    /// Upload textures and buffers. Call before creating the render pass.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output: &EguiFrameOutput,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, image_delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &output.paint_jobs,
            screen_descriptor,
        )
    }

    pub fn renderer(&self) -> &egui_wgpu::Renderer {
        &self.renderer
    }

    /// Free textures after the frame is submitted.
    pub fn cleanup(&mut self, output: &EguiFrameOutput) {
        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn paint(ctx: &egui::Context, text: &OverlayText) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("coordinates_overlay"),
    ));
    let screen = ctx.screen_rect();
    let font = egui::FontId::proportional(FONT_SIZE);

    for (label, at) in &text.labels {
        let pos = screen.min + egui::vec2(at.x * screen.width(), at.y * screen.height());
        painter.text(pos, egui::Align2::LEFT_BOTTOM, *label, font.clone(), egui::Color32::WHITE);
    }

    let mut baseline = screen.bottom() - MARGIN;
    for line in &text.status {
        let pos = egui::pos2(screen.left() + MARGIN, baseline);
        painter.text(pos, egui::Align2::LEFT_BOTTOM, line, font.clone(), egui::Color32::WHITE);
        baseline -= FONT_SIZE + 4.0;
    }
}
