use ambler_app::{App, AppConfig, KeyCode, WalkApp, WalkContext};
use winit::event::WindowEvent;
use winit::keyboard::PhysicalKey;

/// Headless walkthrough demo: runs the first-person controller against a
/// bare window and reports the camera pose once a second.
#[derive(Default)]
struct Viewer {
    last_report: f64,
}

impl WalkApp for Viewer {
    fn setup(&mut self, _ctx: &mut WalkContext) {
        log::info!("click the window to capture the cursor; WASD / arrows to walk");
        log::info!("Escape releases the cursor, Escape again quits");
    }

    fn update(&mut self, ctx: &mut WalkContext) {
        if ctx.time.elapsed - self.last_report >= 1.0 {
            self.last_report = ctx.time.elapsed;
            let p = ctx.pose.position;
            log::info!(
                "camera ({:+.2}, {:+.2}, {:+.2})  yaw {:+.2}  pitch {:+.2}  {:.0} fps",
                p.x,
                p.y,
                p.z,
                ctx.pose.yaw,
                ctx.pose.pitch,
                ctx.time.fps
            );
        }
    }

    fn on_window_event(&mut self, event: &WindowEvent, ctx: &mut WalkContext) {
        // Escape while the cursor is free quits; while locked, the runner
        // only releases the lock.
        if let WindowEvent::KeyboardInput { event: key, .. } = event {
            if key.state.is_pressed()
                && key.physical_key == PhysicalKey::Code(KeyCode::Escape)
                && !ctx.locked
            {
                ctx.request_exit();
            }
        }
    }
}

fn init_logging() -> anyhow::Result<()> {
    let level = std::env::var("AMBLER_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Optional tuning file next to the binary; missing file = defaults.
    let config = AppConfig::load("ambler.toml")?;

    App::new(Viewer::default())
        .with_config(config)
        .run()
}
