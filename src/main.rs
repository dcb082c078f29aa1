//! Fortune Wheel
//!
//! Press Space to spin; the pointer slows down and the label it stops on is
//! shown below the wheel.

use std::process::ExitCode;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use fortune_wheel::{
    config::AppConfig,
    game::{Game, WheelGame},
    systems::{RenderSystem, SimulationSystem, WindowSystem},
};
use wheel_input::SpinController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    game: WheelGame,
    controller: SpinController,
    /// Set when the app had to stop because of an unrecoverable error
    fatal_error: Option<String>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let game = WheelGame::from_config(&config);
        let simulation = SimulationSystem::new(&config.simulation);

        log::info!(
            "Wheel ready with {} segments",
            game.wheel().segments().len()
        );

        Self {
            config,
            window: None,
            render: None,
            simulation,
            game,
            controller: SpinController::new(),
            fatal_error: None,
        }
    }

    /// Log an unrecoverable error and stop the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, message: String) {
        log::error!("{}", message);
        self.fatal_error = Some(message);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e.to_string()),
        };

        let (width, height) = window.size();
        let logical_size = self.game.layout(width, height);
        let render = match RenderSystem::new(
            window.window().clone(),
            logical_size,
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, e.to_string()),
        };

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.controller.reset();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                let result = self.simulation.update(&mut self.game, &mut self.controller);
                if result.ticks > 0 {
                    log::trace!("Ran {} ticks", result.ticks);
                }

                if let Some(render) = &mut self.render {
                    if let Err(e) = render.render_frame(&self.game) {
                        if e.is_fatal() {
                            return self.fail(event_loop, e.to_string());
                        }
                        log::warn!("{}", e);
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Fortune Wheel");

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    match app.fatal_error {
        Some(_) => ExitCode::FAILURE,
        None => ExitCode::SUCCESS,
    }
}
