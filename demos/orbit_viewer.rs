/// Interactive viewer: drives the layout engine from winit input and rasterizes each frame
/// on the CPU into a softbuffer surface.
///
/// Labels are drawn as flat quads tinted by their emissive color; text rasterization is
/// left to a real renderer.
///
/// Keys: `s` moves the rings out, `w` moves them back in, `d` flips coordinates and tangents.
///
/// Run with:
/// ```
/// RUST_LOG=unit_circle=debug cargo run --example orbit_viewer
/// ```
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use unit_circle::euclid::default::{Point3D, Vector3D};
use unit_circle::{AnimationDriver, Frame, FrameSink, InputEvent, LayoutConfig};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::Key;
use winit::window::{Window, WindowId};

const CAMERA_Z: f32 = 100.0;
const FOV_DEGREES: f32 = 75.0;
/// Local bounds of a label quad before scaling.
const LABEL_EXTENT: Vector3D<f32> = Vector3D::new(8.0, 4.0, 0.0);
/// The background is evaluated once per block of this many pixels squared.
const BACKGROUND_BLOCK: usize = 4;

/// Software rasterizer writing into an XRGB buffer.
struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
    }

    /// Perspective projection to pixel coordinates, `None` behind the camera.
    fn project(&self, point: Point3D<f32>) -> Option<(f32, f32)> {
        let depth = CAMERA_Z - point.z;
        if depth <= 0.1 {
            return None;
        }
        let focal = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
        let half_height = self.height as f32 / 2.0;
        let x = self.width as f32 / 2.0 + point.x * focal / depth * half_height;
        let y = half_height - point.y * focal / depth * half_height;
        Some((x, y))
    }

    fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: u32) {
        let clamp_x = |v: f32| (v.max(0.0) as usize).min(self.width);
        let clamp_y = |v: f32| (v.max(0.0) as usize).min(self.height);
        let (x0, x1) = (clamp_x(x0), clamp_x(x1));
        let (y0, y1) = (clamp_y(y0), clamp_y(y1));
        for y in y0..y1 {
            self.pixels[y * self.width + x0..y * self.width + x1].fill(color);
        }
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: u32) {
        let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil() as usize;
        for step in 0..=steps {
            let t = if steps == 0 { 0.0 } else { step as f32 / steps as f32 };
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            if x >= 0.0 && y >= 0.0 && (x as usize) < self.width && (y as usize) < self.height {
                self.pixels[y as usize * self.width + x as usize] = color;
            }
        }
    }
}

impl FrameSink for Canvas {
    fn present(&mut self, frame: &Frame) {
        for by in (0..self.height).step_by(BACKGROUND_BLOCK) {
            for bx in (0..self.width).step_by(BACKGROUND_BLOCK) {
                let frag_y = (self.height - by) as f32;
                let color = frame.background.shade(bx as f32, frag_y).to_xrgb_u32();
                let x1 = (bx + BACKGROUND_BLOCK) as f32;
                let y1 = (by + BACKGROUND_BLOCK) as f32;
                self.fill_rect(bx as f32, by as f32, x1, y1, color);
            }
        }

        for divider in &frame.dividers {
            let direction = Vector3D::new(divider.position.x, divider.position.y, 0.0).normalize()
                * (divider.length / 2.0);
            let near = (divider.position - direction).to_point();
            let far = (divider.position + direction).to_point();
            if let (Some(a), Some(b)) = (self.project(near), self.project(far)) {
                self.line(a, b, divider.color.to_xrgb_u32());
            }
        }

        // Farthest first so nearer labels cover the ones behind them.
        let mut visible: Vec<_> = frame.layout.visible().collect();
        visible.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));
        for element in visible {
            let model = element.model_matrix(LABEL_EXTENT);
            let corners = [
                Point3D::new(0.0, 0.0, 0.0),
                Point3D::new(LABEL_EXTENT.x, 0.0, 0.0),
                Point3D::new(0.0, LABEL_EXTENT.y, 0.0),
                Point3D::new(LABEL_EXTENT.x, LABEL_EXTENT.y, 0.0),
            ];
            let projected: Option<Vec<(f32, f32)>> = corners
                .iter()
                .map(|corner| model.transform_point3d(*corner).and_then(|p| self.project(p)))
                .collect();
            let Some(projected) = projected else { continue };

            let (mut x0, mut y0, mut x1, mut y1) = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
            for (x, y) in projected {
                x0 = x0.min(x);
                y0 = y0.min(y);
                x1 = x1.max(x);
                y1 = y1.max(y);
            }
            // Skip labels so close they would cover the whole window.
            if x1 - x0 > self.width as f32 * 2.0 {
                continue;
            }
            let color = element.emissive.to_array();
            let lifted = unit_circle::Color::rgb(
                0.2 + color[0] * 0.8,
                0.2 + color[1] * 0.8,
                0.2 + color[2] * 0.8,
            );
            self.fill_rect(x0, y0, x1, y1, lifted.to_xrgb_u32());
        }
    }
}

struct App {
    window: Option<Arc<Window>>,
    softbuffer_context: Option<softbuffer::Context<Arc<Window>>>,
    softbuffer_surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    driver: AnimationDriver,
    canvas: Canvas,
    started: Instant,
}

impl App {
    fn new(config: LayoutConfig) -> Self {
        Self {
            window: None,
            softbuffer_context: None,
            softbuffer_surface: None,
            driver: AnimationDriver::new(config).unwrap(),
            canvas: Canvas {
                width: 0,
                height: 0,
                pixels: Vec::new(),
            },
            started: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(Window::default_attributes().with_title("Unit circle"))
                .unwrap(),
        );
        let size = window.inner_size();

        let softbuffer_context = softbuffer::Context::new(window.clone()).unwrap();
        let mut softbuffer_surface =
            softbuffer::Surface::new(&softbuffer_context, window.clone()).unwrap();
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            softbuffer_surface.resize(width, height).unwrap();
        }

        self.canvas.resize(size.width as usize, size.height as usize);
        self.driver.push_event(InputEvent::Resized {
            width: size.width as f32,
            height: size.height as f32,
        });

        window.request_redraw();
        self.window = Some(window);
        self.softbuffer_context = Some(softbuffer_context);
        self.softbuffer_surface = Some(softbuffer_surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        let Some(softbuffer_surface) = &mut self.softbuffer_surface else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    softbuffer_surface.resize(width, height).unwrap();
                    self.canvas.resize(size.width as usize, size.height as usize);
                }
                self.driver.push_event(InputEvent::Resized {
                    width: size.width as f32,
                    height: size.height as f32,
                });
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.driver.push_event(InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Key::Character(text) = &event.logical_key {
                        if !self.driver.push_key(text.as_str()) {
                            tracing::debug!(key = %text, "unbound key");
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
                self.driver.run_frame(elapsed_ms, &mut self.canvas);

                let mut buffer = softbuffer_surface.buffer_mut().unwrap();
                let count = buffer.len().min(self.canvas.pixels.len());
                buffer[..count].copy_from_slice(&self.canvas.pixels[..count]);
                buffer.present().unwrap();

                window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new().expect("to start an event loop");
    let mut app = App::new(LayoutConfig::default());
    event_loop.run_app(&mut app).unwrap();
}
