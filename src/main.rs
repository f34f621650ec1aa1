mod command;
mod config;
mod demo;
mod error;
mod history;
mod operation;
mod receiver;
mod session;

use std::io::{self, BufRead, Write};
use std::panic;
use std::path::PathBuf;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing::{error, info};

use config::AppConfig;
use demo::Demo;
use error::AppError;
use session::Session;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    demo: Option<Demo>,
}

/// Parse command line arguments (`args[0]` is the program name)
fn parse_args(args: &[String]) -> Result<Args, AppError> {
    let mut config = None;
    let mut demo = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                let path = args.get(i + 1)
                    .ok_or_else(|| AppError::Args("--config requires a file".to_string()))?;
                config = Some(PathBuf::from(path));
                i += 2;
            }
            "--demo" => {
                let name = args.get(i + 1)
                    .ok_or_else(|| AppError::Args("--demo requires a name".to_string()))?;
                demo = Some(Demo::parse(name).ok_or_else(|| {
                    AppError::Args(format!("unknown demo '{}', use command or memento", name))
                })?);
                i += 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            arg => return Err(AppError::Args(format!("unknown option: {}", arg))),
        }
    }

    Ok(Args { config, demo })
}

/// Log panics before the default hook prints them
fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        if let Some(location) = info.location() {
            error!(
                file = location.file(),
                line = location.line(),
                "panic occured"
            );
        } else {
            error!("panic occured");
        }

        default_hook(info);
    }));
}

fn print_help() {
    eprintln!("rewind - undo/redo walkthroughs for commands and snapshots");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    rewind [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -c, --config <FILE>  Load settings from a TOML file");
    eprintln!("    --demo <NAME>        Replay a walkthrough (command, memento) and exit");
    eprintln!("    -h, --help           Print this help message");
    eprintln!();
    eprintln!("Without --demo, commands are read from stdin. Type 'help' for the list.");
}

/// Colour a session line by what produced it
fn render(line: &str, color: bool) -> String {
    if !color {
        return line.to_string();
    }
    if line.starts_with("Nothing to") || line.starts_with("Unknown command") {
        line.yellow().to_string()
    } else if line.starts_with("Undid") || line.starts_with("Redid") {
        line.green().to_string()
    } else if line.starts_with("The character") || line.starts_with('[') {
        line.cyan().to_string()
    } else {
        line.to_string()
    }
}

fn run_demo(demo: Demo, session: &mut Session, color: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for (input, lines) in demo.run(session) {
        let echo = format!("> {}", input);
        if color {
            writeln!(out, "{}", echo.as_str().dark_grey())?;
        } else {
            writeln!(out, "{}", echo)?;
        }
        for line in lines {
            writeln!(out, "{}", render(&line, color))?;
        }
    }
    Ok(())
}

fn run_repl(session: &mut Session, config: &AppConfig, color: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();

    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        for output in session.run_line(&line) {
            writeln!(out, "{}", render(&output, color))?;
        }
        if session.should_quit {
            break;
        }
    }
    Ok(())
}

fn run() -> Result<(), AppError> {
    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv)?;
    let config = AppConfig::load(args.config.as_ref())?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();
    info!(limit = config.history_limit, "rewind started");

    install_panic_hook();

    let color = config.color && io::stdout().is_tty();
    let mut session = Session::new(&config);

    let result = match args.demo {
        Some(demo) => run_demo(demo, &mut session, color),
        None => run_repl(&mut session, &config, color),
    };

    result.map_err(|e| {
        error!(error = %e, "session aborted");
        AppError::from(e)
    })
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
