//! Duo Pong entry point
//!
//! Owns the window, pumps keyboard events into the input state, and runs
//! the frame loop: sample delta time, tick the simulation, report scoring
//! lines, draw the three quads.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use duo_pong::consts::{MAX_FRAME_DT, WINDOW_SIZE};
use duo_pong::input::InputState;
use duo_pong::renderer::RenderState;
use duo_pong::settings::Settings;
use duo_pong::sim::{GameEvent, GameState, Player, TickInput, tick};

struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    game: GameState,
    input: InputState,
    last_frame: Instant,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            window: None,
            render_state: None,
            game: GameState::new(),
            input: InputState::default(),
            last_frame: Instant::now(),
        }
    }

    /// Print one line per scoring event, wording fixed.
    fn report(events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Scored { player, score } => {
                    println!(
                        "Player {} Scored! Current score is {} to {}",
                        player.number(),
                        score.p1,
                        score.p2
                    );
                }
                GameEvent::RoundWon { player } => {
                    println!("Player {} Wins! Score is reset.", player.number());
                }
            }
        }
    }

    fn frame(&mut self) {
        // Elapsed time since the previous frame, clamped and re-sampled
        // every frame; the only place wall-clock time enters the game.
        let now = Instant::now();
        let dt = now
            .duration_since(self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame = now;

        let input = TickInput {
            p1_intent: self.input.paddle_intent(Player::One),
            p2_intent: self.input.paddle_intent(Player::Two),
        };
        let events = tick(&mut self.game, &input, dt);
        Self::report(&events);

        if let Some(ref mut render_state) = self.render_state {
            // Draw order: ball, paddle 1, paddle 2
            let entities = [
                (self.game.ball.world_matrix(), self.settings.ball_color),
                (self.game.player1.world_matrix(), self.settings.paddle_color),
                (self.game.player2.world_matrix(), self.settings.paddle_color),
            ];

            match render_state.render(&entities) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory");
                    std::process::exit(1);
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Duo Pong")
                        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE))
                        .with_resizable(false),
                )
                .expect("Failed to create window"),
        );

        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            &self.settings,
        ));

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.handle_key(code, event.state.is_pressed());
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Duo Pong starting...");

    let settings = Settings::load();

    let event_loop = EventLoop::new().unwrap_or_else(|e| {
        log::error!("Failed to create event loop: {e}");
        std::process::exit(1);
    });
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        std::process::exit(1);
    }
}
