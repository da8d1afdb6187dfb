//! Rowed entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{dispatch, io_ops, translate_key};
use core_config::{Config, load_from};
use core_events::InputEvent;
use core_model::{EditorModel, View};
use core_render::RenderEngine;
use core_render::render_engine::clear_screen;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard};
use core_text::Document;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Instant;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "rowed", version, about = "Rowed terminal text editor")]
struct Args {
    /// File to open at startup. Without it the editor starts on an empty, unnamed document.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `rowed.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    model: EditorModel,
    config: Config,
    engine: RenderEngine,
    _terminal_guard: TerminalGuard<'a>,
}

/// What the loop does after one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Quit,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run(&mut self, args: &Args) -> Result<RuntimeContext<'_>> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

        let config = load_from(args.config.clone())?;
        // Load before raw mode so a failure is reported on a usable terminal.
        let state = load_editor_state(args.path.as_deref(), &config)?;

        let (width, height) = self.backend.size()?;
        let guard = self.backend.enter_guard()?;
        let model = EditorModel::new(state, View::new(width as usize, height as usize));
        info!(
            target: "runtime",
            width,
            height,
            rows = model.state().document.len(),
            config = ?config.source,
            "bootstrap_complete"
        );
        Ok(RuntimeContext {
            model,
            engine: RenderEngine::new(config.write_buffer_capacity()),
            config,
            _terminal_guard: guard,
        })
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("rowed.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "rowed.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Build the initial editor state. A named file that cannot be read is fatal.
fn load_editor_state(path: Option<&Path>, config: &Config) -> Result<EditorState> {
    let mut state = match path {
        Some(p) => {
            let doc = io_ops::read_document(p).with_context(|| format!("open {}", p.display()))?;
            EditorState::new(doc).with_file_name(p)
        }
        None => EditorState::new(Document::new()),
    };
    state.set_quit_confirmations(config.quit_confirmations());
    state.message_ttl = config.message_timeout();
    state.set_status_message(HELP_MESSAGE);
    Ok(state)
}

fn handle_event(model: &mut EditorModel, event: InputEvent) -> LoopControl {
    match event {
        InputEvent::Resize(w, h) => {
            model.view_mut().resize(w as usize, h as usize);
            LoopControl::Continue
        }
        InputEvent::Key(key) => {
            let Some(action) = translate_key(&key, model.state().prompt.is_active()) else {
                return LoopControl::Continue;
            };
            if dispatch(action, model).quit {
                LoopControl::Quit
            } else {
                LoopControl::Continue
            }
        }
    }
}

fn run_loop(ctx: &mut RuntimeContext<'_>) -> Result<()> {
    let stdout = std::io::stdout();
    let poll_timeout = ctx.config.poll_timeout();
    loop {
        ctx.engine.render(&ctx.model, Instant::now(), stdout.lock())?;
        let Some(event) = core_input::read_event(poll_timeout)? else {
            continue;
        };
        if handle_event(&mut ctx.model, event) == LoopControl::Quit {
            clear_screen(stdout.lock())?;
            info!(target: "runtime", frames = ctx.engine.metrics().frames, "shutdown");
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut app = AppStartup::new();
    let mut ctx = app.run(&args)?;
    run_loop(&mut ctx)
}
