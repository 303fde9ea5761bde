//! Frame driver: input polling, one fixed simulation step, render
//! submission, in strict sequence each frame.

use std::sync::Arc;

use game_core::{
    create_ball, create_paddle, step, Ball, CameraView, Config, Events, InputQueue, MatchState,
    Paddle, Params, Score, Side, Time,
};
use glam::Vec3;
use hecs::World;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::input::HeldKeys;
use crate::renderer::draw::FrameScene;
use crate::renderer::Renderer;

/// All simulation state for a local match
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub match_state: MatchState,
    pub events: Events,
    pub input_queue: InputQueue,
    pub camera: CameraView,
}

impl LocalGame {
    pub fn new() -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Red);
        create_paddle(&mut world, Side::Blue);
        let ball = Ball::serve();
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            time: Time::new(Params::FIXED_DT, 0.0),
            config: Config::new(),
            score: Score::new(),
            match_state: MatchState::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            camera: CameraView::default(),
        }
    }

    /// Advance by one fixed step with the given paddle intents
    pub fn step(&mut self, red_dir: i8, blue_dir: i8) {
        self.input_queue.push_intent(Side::Red, red_dir);
        self.input_queue.push_intent(Side::Blue, blue_dir);

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.match_state,
            &mut self.events,
            &mut self.input_queue,
            self.camera,
        );
    }

    pub fn frame_scene(&self) -> FrameScene {
        let mut red_pos = Vec3::ZERO;
        let mut blue_pos = Vec3::ZERO;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Red => red_pos = paddle.pos,
                Side::Blue => blue_pos = paddle.pos,
            }
        }

        let (ball_pos, ball_spin) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.spin))
            .unwrap_or((Vec3::ZERO, 0.0));

        FrameScene {
            red_pos,
            blue_pos,
            ball_pos,
            ball_spin,
            camera_mode: self.camera,
            red_score: self.score.red,
            blue_score: self.score.blue,
        }
    }
}

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: LocalGame,
    held_keys: HeldKeys,
    frame_count: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            game: LocalGame::new(),
            held_keys: HeldKeys::new(),
            frame_count: 0,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        // Ignore key-repeat: the held-key set already models "still down"
        if event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::Space => {
                    self.game.camera = self.game.camera.cycle();
                    log::debug!("Camera view: {:?}", self.game.camera);
                }
                _ => self.held_keys.press(code),
            },
            ElementState::Released => self.held_keys.release(code),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Fixed nominal timestep: one slice per frame, decoupled from
        // actual elapsed wall time.
        self.game
            .step(self.held_keys.red_dir(), self.held_keys.blue_dir());

        if self.game.events.red_scored || self.game.events.blue_scored {
            log::info!(
                "Score: red {} - blue {}",
                self.game.score.red,
                self.game.score.blue
            );
        }
        if self.game.match_state.game_over && self.frame_count % 300 == 0 {
            match self.game.score.has_winner(self.game.config.win_score) {
                Some(Side::Red) => log::info!("Game over: red wins"),
                Some(Side::Blue) => log::info!("Game over: blue wins"),
                None => {}
            }
        }
        self.frame_count += 1;

        let scene = self.game.frame_scene();
        if let Some(renderer) = &mut self.renderer {
            match renderer.draw(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {e:?}"),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("court-pong")
            .with_inner_size(winit::dpi::LogicalSize::new(1000, 700));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                std::process::exit(1);
            }
        };

        // Graphics init failures are startup-only and fatal
        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialise renderer: {e}");
                std::process::exit(1);
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
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event, event_loop),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
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

/// Build the event loop, exiting with status 1 on failure
pub fn create_event_loop() -> EventLoop<()> {
    match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    }
}
