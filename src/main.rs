mod error;
mod host;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tablet::config::MapConfig;
use tablet::locator::SceneLocator;
use tablet::scene::SceneSnapshot;
use tablet::session::MapSession;

use crate::error::HostError;
use crate::host::PngOverlay;

#[derive(Parser, Debug)]
#[command(name = "outside-map", about = "Render the outside map tablet for a scene snapshot")]
struct Cli {
    /// Scene snapshot JSON (`{"objects": [...]}`).
    #[arg(long, env = "MAP_SCENE")]
    scene: PathBuf,

    /// Where the presented map is written.
    #[arg(long, env = "MAP_OUT", default_value = "outside-map.png")]
    out: PathBuf,

    /// Map config JSON. Falls back to `MAP_*` environment variables.
    #[arg(long, env = "MAP_CONFIG")]
    config: Option<PathBuf>,

    /// Number of ticks with the toggle pressed.
    #[arg(long, default_value_t = 1)]
    toggles: u32,
}

fn read(path: &Path) -> Result<String, HostError> {
    std::fs::read_to_string(path).map_err(|source| HostError::Read { path: path.to_path_buf(), source })
}

fn load_config(path: Option<&Path>) -> Result<MapConfig, HostError> {
    let Some(path) = path else {
        return Ok(MapConfig::from_env()?);
    };
    let config: MapConfig = serde_json::from_str(&read(path)?)
        .map_err(|source| HostError::ConfigFile { path: path.to_path_buf(), source })?;
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), HostError> {
    let config = load_config(cli.config.as_deref())?;
    let scene = SceneSnapshot::from_json(&read(&cli.scene)?)?;
    tracing::info!(objects = scene.objects().len(), scene = %cli.scene.display(), "scene loaded");

    let mut session = MapSession::new(SceneLocator::new(scene));
    let mut overlay = PngOverlay::new(cli.out.clone());
    for tick in 0..cli.toggles {
        let action = session.tick(true, &config, &mut overlay);
        tracing::debug!(tick, ?action, "tick");
    }

    if cli.toggles > 0 && overlay.presented() == 0 {
        return Err(HostError::NothingPresented(cli.out.clone()));
    }
    tracing::info!(presented = overlay.presented(), open = overlay.visible(), "done");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "outside-map failed");
            ExitCode::FAILURE
        }
    }
}
