use color_eyre::eyre::{Result, WrapErr};
use cvkick::app::App;
use cvkick::config::Config;
use cvkick::logging;
use directories::ProjectDirs;
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cvkick", "cvkick")
}

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn get_log_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.data_local_dir().join("cvkick.log")
    } else {
        PathBuf::from("cvkick.log")
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = Config::load_or_default(&get_config_path());
    match logging::init(&config.logging, &get_log_path()) {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    let mut terminal = ratatui::init();
    ratatui::crossterm::execute!(io::stdout(), EnableBracketedPaste)?;

    let result = run(&mut terminal, config);

    let _ = ratatui::crossterm::execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().wrap_err("Failed to start the async runtime")?;
    let _runtime = rt.enter();
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to handle input: {e:#}"),
            }
        }

        app.process_async_events();
        app.expire_toasts(Instant::now());
    }

    tracing::info!("Shutting down");
    Ok(())
}
