use clap::Parser;
use log::{error, info};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_kit::cli::Cli;
use scene_kit::controller::{Button, KeyState};
use scene_kit::demos::{create_demo, Demo};
use scene_kit::frame::{FpsCounter, FrameIterator};
use scene_kit::math::SurfaceFunction;
use scene_kit::renderer::Renderer;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    demo: Box<dyn Demo>,
    frames: FrameIterator,
    keys: KeyState,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli, demo: Box<dyn Demo>) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            demo,
            frames: FrameIterator::new(),
            keys: KeyState::new(),
            fps: FpsCounter::new(),
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        if let Some((button, pressed)) = self.keys.process(event) {
            if button == Button::Escape && pressed {
                event_loop.exit();
                return;
            }
            self.demo.input(button, pressed);
        }
    }

    fn redraw(&mut self) {
        let frame = self.frames.next().expect("frame iterator is infinite");
        self.fps.tick(frame.delta);
        self.demo.update(&frame);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let fps = self.fps.fps();
        let name = self.demo.name();
        let current = self.demo.selected_surface();
        let mut selected = current;

        let result = renderer.render(self.demo.scene(), self.demo.camera(), window, |ctx| {
            egui::Window::new("overlay")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{fps:.0} FPS"))
                            .size(18.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );
                    ui.label(egui::RichText::new(name).size(12.0).color(egui::Color32::GRAY));

                    if let Some(mut choice) = selected {
                        egui::ComboBox::from_label("function")
                            .selected_text(choice.label())
                            .show_ui(ui, |ui| {
                                for f in SurfaceFunction::ALL {
                                    ui.selectable_value(&mut choice, f, f.label());
                                }
                            });
                        selected = Some(choice);
                    }
                });
        });

        if let Err(e) = result {
            error!("render error: {e:#}");
        }

        // Apply the dropdown change after the frame's borrow of the scene
        // ends; the rebuild lands before the next frame renders.
        if let (Some(choice), Some(current)) = (selected, current) {
            if choice != current {
                self.demo.select_surface(choice);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(format!("scene-kit: {}", self.demo.name()))
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), !self.cli.no_ui)) {
            Ok(r) => r,
            Err(e) => {
                error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.demo.camera_mut().resize(size.width, size.height);

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

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
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event, event_loop),
            WindowEvent::Resized(new_size) => {
                // Projection and surface both update before the next frame.
                self.demo.camera_mut().resize(new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Step the demo without a window; exercises the full update path.
fn run_headless(demo: &mut dyn Demo, frames: u64) {
    let mut iterator = FrameIterator::new();
    for _ in 0..frames {
        let frame = iterator.next().expect("frame iterator is infinite");
        demo.update(&frame);
    }
    info!(
        "{}: stepped {} frames, {} draw items",
        demo.name(),
        frames,
        demo.scene().draw_list().len()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut demo = create_demo(cli.demo);

    if let Some(frames) = cli.headless_frames {
        run_headless(demo.as_mut(), frames);
        return Ok(());
    }

    println!(
        "scene-kit: {} - arrows to move, Escape to quit",
        demo.name()
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, demo);
    event_loop.run_app(&mut app)?;

    Ok(())
}
