//! Viewer builder and event loop.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::ViewerError;
use crate::gpu::GpuState;
use crate::input::pressed_key;
use crate::mode::DisplayMode;
use crate::params::SimulationParameters;
use crate::scene::{Response, Scene};
use crate::view::DEFAULT_EXTENT;
use crate::visuals::{ColorMapping, Primitive};

/// Everything the builder collects before the window opens.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub params: SimulationParameters,
    pub mode: DisplayMode,
    pub extent: f64,
    pub color_mapping: ColorMapping,
    pub primitive: Primitive,
    pub background: [f64; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Coordinates".to_string(),
            window_size: (500, 500),
            params: SimulationParameters::default(),
            mode: DisplayMode::default(),
            extent: DEFAULT_EXTENT,
            color_mapping: ColorMapping::default(),
            primitive: Primitive::default(),
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl ViewerConfig {
    /// Scene the viewer starts from.
    pub fn scene(&self) -> Scene {
        Scene::new(self.params, self.mode, self.extent).with_color_mapping(self.color_mapping)
    }
}

/// Interactive attractor viewer.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// ```ignore
/// use coordinates::prelude::*;
///
/// Viewer::new()
///     .with_mode(DisplayMode::FourD)
///     .with_primitive(Primitive::LineStrip)
///     .run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    config: ViewerConfig,
}

impl Viewer {
    /// Create a viewer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_size = (width, height);
        self
    }

    /// Starting equation parameters, also restored by the reset key.
    pub fn with_params(mut self, params: SimulationParameters) -> Self {
        self.config.params = params;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Starting half-extent of the orthographic box, also restored by the reset key.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.config.extent = extent;
        self
    }

    pub fn with_color_mapping(mut self, mapping: ColorMapping) -> Self {
        self.config.color_mapping = mapping;
        self
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.config.primitive = primitive;
        self
    }

    /// Clear color, RGB in 0..1.
    pub fn with_background(mut self, rgb: [f64; 3]) -> Self {
        self.config.background = rgb;
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Open the window and run until Escape or close.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct App {
    config: ViewerConfig,
    scene: Scene,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    /// Start-up failure raised inside the event loop.
    error: Option<ViewerError>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let scene = config.scene();
        Self {
            config,
            scene,
            window: None,
            gpu_state: None,
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            self.config.primitive,
            self.config.background,
        ))?;

        log::info!("Opened {}x{} window \"{}\"", width, height, self.config.title);
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        self.refresh();
        Ok(())
    }

    /// Title the window is opened with and keeps while the overlay is drawn.
    fn window_title(&self) -> String {
        self.config.title.clone()
    }

    /// Schedule a redraw. Without the overlay the status line is shown in
    /// the title instead.
    fn refresh(&self) {
        if let Some(window) = &self.window {
            #[cfg(not(feature = "egui"))]
            window.set_title(&format!(
                "{} - {}",
                self.window_title(),
                self.scene.status_line()
            ));
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                log::error!("{}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        {
            if let Some(gpu_state) = &mut self.gpu_state {
                gpu_state.on_window_event(&event);
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                self.refresh();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = pressed_key(&event) else {
                    return;
                };
                match self.scene.handle_key(key) {
                    Response::Quit => {
                        log::info!("Escape pressed, exiting");
                        event_loop.exit();
                    }
                    Response::Redraw => self.refresh(),
                    Response::Ignored => {}
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    match gpu_state.render(&self.scene) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            log::warn!("Surface lost, reconfiguring");
                            gpu_state.reconfigure();
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Param;

    #[test]
    fn test_default_config_matches_classic_window() {
        let config = ViewerConfig::default();
        assert_eq!(config.title, "Coordinates");
        assert_eq!(config.window_size, (500, 500));
        assert_eq!(config.extent, 55.0);
        assert_eq!(config.mode, DisplayMode::ThreeD);
        assert_eq!(config.color_mapping, ColorMapping::Speed);
        assert_eq!(config.primitive, Primitive::Points);
    }

    #[test]
    fn test_window_opens_with_configured_title() {
        let app = App::new(ViewerConfig::default());
        assert_eq!(app.window_title(), ViewerConfig::default().title);

        let app = App::new(Viewer::new().with_title("Lorenz").config.clone());
        assert_eq!(app.window_title(), "Lorenz");
    }

    #[test]
    fn test_builder_sets_fields() {
        let viewer = Viewer::new()
            .with_title("Lorenz")
            .with_window_size(800, 600)
            .with_params(SimulationParameters::new(1.0, 2.0, 3.0))
            .with_mode(DisplayMode::FourD)
            .with_extent(80.0)
            .with_color_mapping(ColorMapping::Raw)
            .with_primitive(Primitive::LineStrip)
            .with_background([0.1, 0.2, 0.3]);

        let config = viewer.config();
        assert_eq!(config.title, "Lorenz");
        assert_eq!(config.window_size, (800, 600));
        assert_eq!(config.params.rho, 3.0);
        assert_eq!(config.background, [0.1, 0.2, 0.3]);

        let scene = config.scene();
        assert_eq!(scene.mode, DisplayMode::FourD);
        assert_eq!(scene.view.extent, 80.0);
        assert_eq!(scene.color_mapping, ColorMapping::Raw);
        assert_eq!(scene.active, Param::Sigma);
    }
}
