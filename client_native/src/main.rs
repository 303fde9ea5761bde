use winit::event_loop::ControlFlow;

mod app;
mod camera;
mod input;
mod mesh;
mod renderer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = app::create_event_loop();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        std::process::exit(1);
    }
}
