//! Monitor and one-shot runners

use std::env;
use std::future::Future;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::application::ports::{
    AssumeYes, Clipboard, ConfigStore, Confirm, HostBridge, RenderSurface,
};
use crate::application::{
    history_store, AboutHandler, BridgeResolver, ClearHandler, ClearOutcome, CopyHandler,
    CopyOutcome, RefreshLoop, RefreshOutcome, Renderer, Screen,
};
use crate::domain::config::AppConfig;
use crate::domain::status::Status;
use crate::infrastructure::{
    create_bridge, create_clipboard, HtmlFileSurface, TerminalMode, TerminalSurface,
    XdgConfigStore,
};

use super::input::InputCommand;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Host base URL from the environment
pub const HOST_ENV: &str = "CLIP_MONITOR_HOST";

/// The wired monitor: one store, one screen, and every handler over them
pub struct MonitorApp {
    screen: Screen,
    refresh: Arc<RefreshLoop>,
    copy: Arc<CopyHandler>,
    clear: Arc<ClearHandler>,
    about: Arc<AboutHandler>,
}

impl MonitorApp {
    /// Wire the handlers over `host`, copying through `clipboard` when the
    /// host cannot
    pub fn new(
        host: Arc<dyn HostBridge>,
        clipboard: Arc<dyn Clipboard>,
        renderer: Renderer,
        surfaces: Vec<Arc<dyn RenderSurface>>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        let bridge = Arc::new(BridgeResolver::new(host, clipboard));
        let (writer, reader) = history_store();
        let screen = Screen::new(renderer, reader, surfaces);

        Self {
            refresh: Arc::new(RefreshLoop::new(
                Arc::clone(&bridge),
                writer.clone(),
                screen.clone(),
            )),
            copy: Arc::new(CopyHandler::new(Arc::clone(&bridge), screen.clone())),
            clear: Arc::new(ClearHandler::new(
                Arc::clone(&bridge),
                writer,
                screen.clone(),
                confirm,
            )),
            about: Arc::new(AboutHandler::new(bridge, screen.clone())),
            screen,
        }
    }

    /// Wire the adapters `config` selects
    pub fn from_config(
        config: &AppConfig,
        surfaces: Vec<Arc<dyn RenderSurface>>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self::new(
            create_bridge(config),
            create_clipboard(config.clipboard_tool_or_default()),
            Renderer::new(config.time_format_or_default()),
            surfaces,
            confirm,
        )
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn refresh(&self) -> &Arc<RefreshLoop> {
        &self.refresh
    }

    pub fn copy(&self) -> &Arc<CopyHandler> {
        &self.copy
    }

    pub fn clear(&self) -> &Arc<ClearHandler> {
        &self.clear
    }

    pub fn about(&self) -> &Arc<AboutHandler> {
        &self.about
    }
}

/// Run the interactive monitor until `q`, end of input, or Ctrl-C
pub async fn run_monitor(config: &AppConfig, assume_yes: bool) -> ExitCode {
    let terminal = Arc::new(TerminalSurface::new(TerminalMode::Interactive));
    let app = MonitorApp::from_config(
        config,
        surfaces(config, Arc::clone(&terminal)),
        confirmer(assume_yes, &terminal),
    );

    app.screen().redraw();
    app.screen().status(Status::Monitoring);

    let refresher = Arc::clone(app.refresh()).spawn(config.refresh_interval_or_default());

    let mut lines = spawn_input_reader();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = &mut ctrl_c => break,
        };

        let line = match line {
            Some(Ok(line)) => line,
            None => break,
            Some(Err(e)) => {
                warn!(error = %e, "Failed to read input");
                break;
            }
        };

        // A waiting clear prompt takes the line first
        if terminal.answer(&line) {
            continue;
        }

        match InputCommand::parse(&line) {
            InputCommand::CopyRow(index) => {
                let copy = Arc::clone(app.copy());
                let screen = app.screen().clone();
                start(async move {
                    if copy.copy_row(index).await.is_none() {
                        screen.notice(&format!("No row {}", index));
                    }
                })
                .await;
            }
            InputCommand::Clear => {
                let clear = Arc::clone(app.clear());
                start(async move {
                    clear.clear().await;
                })
                .await;
            }
            InputCommand::About => {
                let about = Arc::clone(app.about());
                start(async move {
                    about.about().await;
                })
                .await;
            }
            InputCommand::Refresh => {
                let refresh = Arc::clone(app.refresh());
                start(async move {
                    refresh.tick().await;
                })
                .await;
            }
            InputCommand::Quit => break,
            InputCommand::Dismiss => terminal.dismiss_notice(),
            InputCommand::Unknown(input) => {
                app.screen().notice(&format!("Unknown command '{}'", input));
            }
        }
    }

    debug!("Stopping monitor");
    refresher.abort();
    println!();
    ExitCode::from(EXIT_SUCCESS)
}

/// Fetch once, print the list and the status, exit
pub async fn run_list(config: &AppConfig) -> ExitCode {
    let app = one_shot(config, false);
    match app.refresh().tick().await {
        RefreshOutcome::Updated(_) => ExitCode::from(EXIT_SUCCESS),
        RefreshOutcome::Failed => ExitCode::from(EXIT_ERROR),
    }
}

/// Copy `text` and exit
pub async fn run_copy(config: &AppConfig, text: &str) -> ExitCode {
    let app = one_shot(config, false);
    match app.copy().copy(text).await {
        CopyOutcome::CopiedByHost => ExitCode::from(EXIT_SUCCESS),
        CopyOutcome::CopiedDirectly => {
            Presenter::new().info("Host cannot copy, wrote the clipboard directly");
            ExitCode::from(EXIT_SUCCESS)
        }
        CopyOutcome::Failed => ExitCode::from(EXIT_ERROR),
    }
}

/// Clear host history, asking first unless `assume_yes`
pub async fn run_clear(config: &AppConfig, assume_yes: bool) -> ExitCode {
    let app = one_shot(config, assume_yes);
    match app.clear().clear().await {
        ClearOutcome::Cleared => ExitCode::from(EXIT_SUCCESS),
        ClearOutcome::Aborted => {
            Presenter::new().info("Aborted");
            ExitCode::from(EXIT_SUCCESS)
        }
        ClearOutcome::Failed => ExitCode::from(EXIT_ERROR),
    }
}

/// Print the about text
pub async fn run_about(config: &AppConfig) -> ExitCode {
    let app = one_shot(config, false);
    app.about().about().await;
    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %store.path().display(), error = %e, "Ignoring config file");
            AppConfig::empty()
        }
    };

    // Build env config
    let env_config = AppConfig {
        host_url: env::var(HOST_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Read stdin lines on a plain thread.
///
/// A blocked read on this thread does not hold up runtime shutdown.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Spawn a user action and let it run up to its first wait.
///
/// A clear action has its prompt registered by the time this returns, so
/// an answer already queued behind the command line reaches it.
async fn start<F>(action: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let handle = tokio::spawn(action);
    tokio::task::yield_now().await;
    handle
}

fn one_shot(config: &AppConfig, assume_yes: bool) -> MonitorApp {
    let terminal = Arc::new(TerminalSurface::new(TerminalMode::Plain));
    MonitorApp::from_config(
        config,
        surfaces(config, Arc::clone(&terminal)),
        confirmer(assume_yes, &terminal),
    )
}

fn surfaces(config: &AppConfig, terminal: Arc<TerminalSurface>) -> Vec<Arc<dyn RenderSurface>> {
    let mut surfaces: Vec<Arc<dyn RenderSurface>> = vec![terminal];
    if let Some(path) = config.html_output() {
        surfaces.push(Arc::new(HtmlFileSurface::new(path)));
    }
    surfaces
}

fn confirmer(assume_yes: bool, terminal: &Arc<TerminalSurface>) -> Arc<dyn Confirm> {
    if assume_yes {
        return Arc::new(AssumeYes);
    }
    Arc::clone(terminal) as Arc<dyn Confirm>
}
