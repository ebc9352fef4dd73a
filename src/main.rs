use anyhow::Result;
use clap::Parser;
use glam::{Vec2, Vec3};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use freecam::camera::Camera;
use freecam::cli::Cli;
use freecam::config::DemoConfig;
use freecam::input::InputAccumulator;
use freecam::loaders::{load_shader_source, parse_shader_source, ShaderSource};
use freecam::renderer::SceneRenderer;
use freecam::scene::demo_scene;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

const DEFAULT_SHADER: &str = include_str!("../shaders/basic.shader");

struct App {
    config: DemoConfig,
    shader: ShaderSource,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: Option<Camera>,
    input: InputAccumulator,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: DemoConfig, shader: ShaderSource) -> Self {
        let input = InputAccumulator::with_threshold(config.mouse_delta_min);
        Self {
            config,
            shader,
            window: None,
            renderer: None,
            camera: None,
            input,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            println!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    // Fixed per-frame order: events have already been folded into the
    // accumulator, so read input, update the camera, draw, then refresh.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);

        let movement = self.input.movement_vector() * self.config.movement_speed;
        let mouse_delta = self.input.mouse_delta() * self.config.mouse_sensitivity;

        let (Some(camera), Some(renderer)) = (&mut self.camera, &mut self.renderer) else {
            return;
        };

        camera.update_transform(
            Vec3::new(movement.x, 0.0, movement.y),
            Vec2::new(mouse_delta.x, mouse_delta.y),
        );

        match renderer.render(camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    renderer.resize(window.inner_size());
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                eprintln!("Render error: out of GPU memory");
                event_loop.exit();
            }
            Err(e) => eprintln!("Render error: {e}"),
        }

        self.input.refresh();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("freecam")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                eprintln!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let camera = match Camera::new(
            self.config.fov_radians(),
            self.config.aspect_ratio(),
            self.config.near_plane,
            self.config.far_plane,
        ) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Invalid projection parameters: {e}");
                event_loop.exit();
                return;
            }
        };

        let meshes = demo_scene();
        let renderer =
            match pollster::block_on(SceneRenderer::new(window.clone(), &self.shader, &meshes)) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

        println!("Scene renderer initialized: {} objects", renderer.object_count());

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.camera = Some(camera);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input.register_key_event(key, event.state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.register_motion_event(position.x, position.y);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    cli.apply_to(&mut config);

    let shader = match &cli.shader {
        Some(path) => load_shader_source(path)?,
        None => parse_shader_source(DEFAULT_SHADER)?,
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, shader);

    println!("freecam - Controls: WASD to move, mouse to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
