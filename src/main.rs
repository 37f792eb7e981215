use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use facecull::{
    config::DemoConfig,
    controller::{input::native, FrameLoop, FrameOutcome, GamepadInput, InputState},
    error::{AppError, Result},
    logging, ui,
    view::{GpuContext, OverlayFrame, Renderer},
};

/// Everything that needs a live window
struct Running {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: Renderer,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    frame_loop: FrameLoop,
    last_frame_time: Instant,
}

struct App {
    config: DemoConfig,
    input_state: InputState,
    gamepad: GamepadInput,
    running: Option<Running>,
    error: Option<AppError>,
}

impl App {
    fn new(config: DemoConfig) -> Self {
        Self {
            input_state: InputState::new(config.bindings.clone()),
            gamepad: GamepadInput::new(),
            config,
            running: None,
            error: None,
        }
    }

    /// Window, GPU and content setup
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;
        let renderer = Renderer::new(&gpu, self.config.clear_color);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let camera = self.config.camera(gpu.config.width, gpu.config.height);
        tracing::info!(
            width = gpu.config.width,
            height = gpu.config.height,
            gamepad = self.gamepad.is_available(),
            "demo started"
        );

        Ok(Running {
            window,
            gpu,
            renderer,
            egui_ctx,
            egui_state,
            frame_loop: FrameLoop::new(camera),
            last_frame_time: Instant::now(),
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        tracing::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl Running {
    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if self.gpu.resize(size.width, size.height) {
            self.renderer.resize(&self.gpu.device, size.width, size.height);
            self.frame_loop.camera.set_aspect(size.width, size.height);
        }
    }

    /// Update then draw one frame
    fn redraw(&mut self, input_state: &InputState, gamepad: &mut GamepadInput) -> Result<FrameOutcome> {
        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let snapshot = input_state.snapshot(&gamepad.poll());
        if self.frame_loop.update(dt, &snapshot) == FrameOutcome::Exit {
            return Ok(FrameOutcome::Exit);
        }
        let frame_data = self.frame_loop.frame_data();

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let output = ui::build_overlay(&self.egui_ctx, raw_input, frame_data.cull_mode);
        self.egui_state.handle_platform_output(&self.window, output.platform_output);
        let overlay = OverlayFrame {
            primitives: self.egui_ctx.tessellate(output.shapes, output.pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        };

        self.window.pre_present_notify();
        self.renderer.draw_frame(&self.gpu, &frame_data, overlay)?;
        Ok(FrameOutcome::Continue)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(running) = self.running.as_mut() else { return };
        if window_id != running.window.id() {
            return;
        }

        let _response = running.egui_state.on_window_event(&running.window, &event);

        if let Some(input) = native::window_event_to_input(&event) {
            self.input_state.process_event(&input);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => running.resize(size),
            WindowEvent::RedrawRequested => match running.redraw(&self.input_state, &mut self.gamepad) {
                Ok(FrameOutcome::Continue) => {}
                Ok(FrameOutcome::Exit) => event_loop.exit(),
                Err(e) => self.fail(event_loop, e),
            },
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    logging::init();

    let config = DemoConfig::from_env();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
