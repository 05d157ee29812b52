use clap::Parser;
use winit::event_loop::EventLoop;

use plane_painter::app::App;
use plane_painter::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Plane Painter - drag to paint, hold Space to orbit, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
