use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use common::panic::{init_panic_detection, run_and_handle_panics};
use common::*;
use config::{ConfigType, CONFIG_PATH_VAR, DEFAULT_CONFIG};
use engine::{Backend, Engine, Logo};
use kinematics::Body;

#[cfg(all(feature = "use-sdl", not(feature = "lite")))]
type ChosenBackend = engine::SdlBackend;

#[cfg(feature = "lite")]
type ChosenBackend = engine::DummyBackend;

lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

fn log_uptime(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "{:8.3}", START_TIME.elapsed().as_secs_f32())
}

fn do_main() -> BoxedResult<()> {
    // load config, embedded unless overridden
    let config_path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let config_type = match &config_path {
        Some(path) => ConfigType::File(path),
        None => ConfigType::String(DEFAULT_CONFIG),
    };
    info!("loading config"; "source" => %config_type.describe());
    config::init(config_type)?;

    let logo_config = &config::get().logo;
    let logo = Logo::embedded(logo_config.scale)?;

    let mut backend = ChosenBackend::new(&logo)?;
    info!("initialized backend"; "backend" => ChosenBackend::name());

    // the body only exists once the logo it moves around is loaded
    let body = {
        let (x, y) = logo_config.initial_position;
        let (vx, vy) = logo_config.initial_velocity;
        Body::builder()
            .position(x, y)
            .velocity(vx, vy)
            .attach(&logo)
    };

    let summary = Engine::new(body, &mut backend).run();
    debug!("ran {frames} frames", frames = summary.frames);

    Ok(())
}

fn main() {
    // uptime in log lines counts from here
    let _ = *START_TIME;

    let logger = match logging::LoggerBuilder::with_env().and_then(|b| b.init(log_uptime)) {
        Err(e) => {
            eprintln!("failed to setup logging: {}", e);
            std::process::exit(1);
        }
        Ok(l) => l,
    };

    info!("initialized logging"; "level" => ?logger.level());
    init_panic_detection();

    let exit = match run_and_handle_panics(do_main) {
        None => {
            // already logged
            1
        }
        Some(Err(e)) => {
            error!("error: {}", e);

            let mut src = e.source();
            while let Some(source) = src {
                error!(" caused by: {}", source);
                src = source.source();
            }

            1
        }
        Some(Ok(())) => 0,
    };

    info!("exiting cleanly with exit code {}", exit);

    // flush logs before exiting
    drop(logger);
    std::process::exit(exit);
}
