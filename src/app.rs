use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorIcon, Window, WindowId};

use crate::camera::{Camera, Viewport};
use crate::canvas::Canvas;
use crate::cli::Cli;
use crate::input::{InputState, PointerResponse};
use crate::orbit::{OrbitControl, OrbitControls};
use crate::picking;
use crate::renderer::Renderer;
use crate::scene::Scene;

const WINDOW_TITLE: &str = "Plane Painter";
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Application state: owns every mutable piece and wires winit events
/// through the input controller into the canvas, orbit controls, and
/// renderer.
pub struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    canvas: Canvas,
    camera: Camera,
    orbit: OrbitControls,
    input: InputState,
    viewport: Viewport,
    cursor: Option<(f32, f32)>,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let viewport = Viewport::new(cli.width, cli.height);
        Self {
            cli,
            window: None,
            renderer: None,
            scene: Scene::new(),
            canvas: Canvas::default(),
            camera: Camera::new(),
            orbit: OrbitControls::new(),
            input: InputState::new(),
            viewport,
            cursor: None,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn set_modifier(&mut self, held: bool) {
        if self.input.set_modifier(held) {
            // Cursor affordance only; nothing functional hangs off it.
            if let Some(window) = &self.window {
                let icon = if held {
                    CursorIcon::Grab
                } else {
                    CursorIcon::Default
                };
                window.set_cursor(icon);
            }
        }
    }

    fn paint_at(&mut self, x: f32, y: f32) {
        let picked = picking::canvas_point(
            x,
            y,
            self.viewport,
            &self.camera,
            &self.scene.plane,
            self.canvas.width(),
            self.canvas.height(),
        );
        if let Some((px, py)) = picked {
            self.canvas.stamp_dot(px, py);
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        // The orbit enabled flag mirrors the modifier key every frame.
        self.orbit.set_enabled(self.input.modifier_held());
        self.orbit.update(&mut self.camera);

        if let Some(renderer) = &self.renderer {
            if self.canvas.take_dirty() {
                renderer.upload_canvas(&self.canvas);
            }

            match renderer.render(&self.camera, &self.scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("out of GPU memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }

        self.update_fps();
    }

    fn update_fps(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.frame_count += 1;
        self.fps_update_timer += delta;
        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            log::debug!(
                "fps: {:.1}",
                self.frame_count as f32 / self.fps_update_timer
            );
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.viewport = Viewport::new(size.width, size.height);

        let renderer =
            match pollster::block_on(Renderer::new(window.clone(), &self.scene, &self.canvas)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

        self.window = Some(window);
        self.renderer = Some(renderer);
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
                if let PhysicalKey::Code(KeyCode::Space) = event.physical_key {
                    if !event.repeat {
                        self.set_modifier(event.state.is_pressed());
                    }
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    if self.input.pointer_down() == PointerResponse::Paint {
                        if let Some((x, y)) = self.cursor {
                            self.paint_at(x, y);
                        }
                    }
                }
                ElementState::Released => self.input.pointer_up(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x as f32, position.y as f32);
                let delta = self
                    .cursor
                    .map(|prev| (pos.0 - prev.0, pos.1 - prev.1))
                    .unwrap_or((0.0, 0.0));
                self.cursor = Some(pos);

                match self.input.pointer_moved() {
                    PointerResponse::Paint => self.paint_at(pos.0, pos.1),
                    PointerResponse::Orbit => self.orbit.apply_gesture(delta.0, delta.1),
                    PointerResponse::Ignored => {}
                }
            }
            WindowEvent::Resized(size) => {
                self.viewport = Viewport::new(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
