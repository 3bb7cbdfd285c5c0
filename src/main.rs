use dot_editor::app;
use dot_editor::config::EditorConfig;
use dot_editor::core::{WINDOW_HEIGHT, WINDOW_WIDTH};
use macroquad::window::Conf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Dot Editor".to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    // Logging is configured from the config, so its own errors go to stderr
    let config = match EditorConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("dot-editor: {err:#}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);
    info!(
        storage = %config.storage_dir.display(),
        export = %config.export_dir.display(),
        "starting dot editor"
    );

    if let Err(err) = app::run(config).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
