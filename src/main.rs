use lazydir::app::App;
use lazydir::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::load();
    lazydir::logging::init(&config.log_path())?;
    info!("Starting lazydir v{}", env!("CARGO_PKG_VERSION"));

    let terminal = ratatui::init();
    let app = App::new(&config);
    let result = app.run(terminal).await;

    ratatui::restore();
    result
}
