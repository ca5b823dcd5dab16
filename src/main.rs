// What you SEE:
// • A yellow circle on a dark background, starting near the top-left corner.
// • Hold any mouse button and move: the circle follows the cursor.
// • w/a/s/d nudge it by 5 px. q (or closing the window) quits.
// • The circle never leaves the window, even after a resize.

mod circle;
mod config;
mod controller;
mod draw;
mod error;
mod raster;
mod types;

use circle::{Circle, Viewport};
use config::Config;
use controller::Controller;
use draw::Drawer;
use error::Error;
use log::{error, info};
use std::collections::VecDeque;
use std::process::ExitCode;
use types::FrameBuffer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Config::default()) {
        Ok(()) => {
            info!("bye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &Config) -> Result<(), Error> {
    /* --- Window setup ---
       Any failure here ends the program with exit code 1. */
    let mut drawer = Drawer::new(
        cfg.title,
        cfg.window.width as usize,
        cfg.window.height as usize,
        cfg.target_fps,
    )?;
    let (w, h) = drawer.size();
    info!("window {w}x{h} opened");

    /* --- The circle and its pre-rendered sprite (built once) --- */
    let mut circle = Circle::new(cfg.start, cfg.radius, cfg.fill)?;
    let (sw, sh) = circle.sprite().dimensions();
    info!("circle r={} at {:?}, sprite {sw}x{sh}", circle.radius(), circle.position());
    let mut screen = FrameBuffer::new(w, h);
    let mut controller = Controller::new(cfg.step);
    let mut events = VecDeque::new();
    let mut last_extent = drawer.extent();

    /* ------------------------------ Main loop ------------------------------ */
    while controller.running() {
        // 1) Queue input seen by the last pump; apply at most one event.
        drawer.collect_events(&mut events);
        if let Some(event) = events.pop_front() {
            controller.handle(event, &mut circle, &drawer);
        }

        // 2) A resize leaves stale pixels behind, so it forces a redraw too.
        let extent = drawer.extent();
        if extent != last_extent {
            info!("window resized to {}x{}", extent.width, extent.height);
            last_extent = extent;
            controller.request_redraw();
        }

        // 3) Redraw only when something changed; otherwise just pump events.
        // A minimised window reports 0x0, which minifb refuses as a buffer.
        if extent.width > 0 && extent.height > 0 && controller.take_redraw() {
            screen.resize(extent.width as usize, extent.height as usize);
            screen.clear(cfg.background);
            circle.draw(&mut screen);
            drawer.present(&screen)?;
        } else {
            drawer.pump();
        }
    }

    Ok(())
}
