//! vaani main entry point
//!
//! Runs the console loop: raw-mode keyboard input on one side, platform
//! playback events on the other. Each turn drains pending speech events
//! into the session's state machine before handling the next keypress.

use log::{debug, error, info};
use mio::{Events, Interest, Poll, Token};
use nix::libc;
use std::io::{self, Read};
use std::os::unix::io::AsRawFd;
use std::process;
use std::time::Duration;
use vaani::config::Config;
use vaani::input::{create_default_keymap, DefaultKeyHandler, HandlerAction, HandlerStack};
use vaani::session::Session;
use vaani::speech::create_engine;
use vaani::term::{self, TermiosGuard};
use vaani::Result;

/// Token for stdin in mio poll
const STDIN: Token = Token(0);

/// Poll timeout; also the cadence for draining playback events
const TICK: Duration = Duration::from_millis(100);

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    if debug_mode {
        // Debug mode: write to vaani.log file
        use std::fs::OpenOptions;
        match OpenOptions::new().create(true).append(true).open("vaani.log") {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open vaani.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }
        info!(
            "vaani {} starting (debug mode, logging to vaani.log)",
            vaani::VERSION
        );
    } else {
        // Errors only by default; RUST_LOG still overrides
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .init();
    }

    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    debug!("Initializing vaani");

    let stdin_fd = io::stdin().as_raw_fd();
    if unsafe { libc::isatty(stdin_fd) } == 0 {
        eprintln!("Error: vaani requires an interactive terminal (stdin is not a TTY)");
        process::exit(1);
    }

    // Initialize the speech engine before touching terminal modes: when the
    // platform has no synthesizer the whole console degrades to this static
    // message and no controls are offered.
    let engine = match create_engine() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Speech synthesis is not available on this system.");
            eprintln!("  {}", e);
            eprintln!("On Linux, install Speech Dispatcher: sudo apt install speech-dispatcher");
            return Ok(());
        }
    };

    let config = Config::load()?;
    info!("Configuration loaded from {:?}", config.path());

    let mut session = Session::new(engine, config)?;
    info!("Session initialized, {} voices", session.catalog.len());

    let original_termios = term::set_raw_mode(stdin_fd)?;
    let _guard = TermiosGuard {
        fd: stdin_fd,
        termios: original_termios,
    };

    let keymap = create_default_keymap();
    let mut default_handler = DefaultKeyHandler::new(keymap);
    let mut handlers = HandlerStack::new();

    let mut poll = Poll::new()?;
    let mut events = Events::with_capacity(16);
    let mut stdin_source = mio::unix::SourceFd(&stdin_fd);
    poll.registry()
        .register(&mut stdin_source, STDIN, Interest::READABLE)?;

    term::write_line(&format!(
        "vaani {} - Hindi and English text to speech",
        vaani::VERSION
    ));
    term::write_line(&format!(
        "{} voices available. Press h for help, q to quit.",
        session.catalog.len()
    ));
    term::write_line(&session.status_line());

    info!("Entering event loop");

    loop {
        // Apply playback events (start/end/error) before anything else so
        // the state machine reflects what the platform actually did
        session.poll_events();
        for notice in session.take_notices() {
            term::write_line(&format!("! {}", notice));
        }

        match poll.poll(&mut events, Some(TICK)) {
            Ok(()) => {}
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }

        for event in events.iter() {
            if event.token() == STDIN {
                if handle_stdin(&mut session, &mut handlers, &mut default_handler)? {
                    term::write_line("Bye.");
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one chunk of keyboard input.
///
/// Returns true when the user asked to quit.
fn handle_stdin(
    session: &mut Session,
    handlers: &mut HandlerStack,
    default_handler: &mut DefaultKeyHandler,
) -> Result<bool> {
    let mut buf = [0u8; 1024];

    let n = io::stdin().read(&mut buf)?;
    if n == 0 {
        return Ok(false);
    }
    let input = &buf[..n];

    // Modal handlers (text entry, voice number) get the input first
    if !handlers.is_empty() {
        let action = handlers.process(input, session)?;
        return Ok(action == HandlerAction::Quit);
    }

    let (action, pushed) = default_handler.process_key(input, session)?;
    if let Some(handler) = pushed {
        handlers.push(Box::new(handler));
    }

    Ok(action == HandlerAction::Quit)
}
