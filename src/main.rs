//! Sumsheet - An addition-only spreadsheet driven by line commands

mod command;
mod screen;

use std::env;
use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use command::Session;

fn print_usage() {
    eprintln!("Usage: sumsheet [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  File of commands to run (default: stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMD>       Run a command instead of a script (can be repeated)");
    eprintln!("  --config <PATH>           Load settings from a TOML file");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Commands: set <REF> <input>, clear <REF>, edit <REF>, show <REF>, print");
    eprintln!("Set SUMSHEET_LOG (e.g. debug) to see engine logs on stderr.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SUMSHEET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run every line through the session. Returns the number of failed commands.
fn run_lines<I>(session: &mut Session, lines: I) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut failures = 0;
    for line in lines {
        let line = line.context("Failed to read command")?;
        match session.execute(&line) {
            Ok(output) => {
                for out in output {
                    println!("{}", out);
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut script_path: Option<PathBuf> = None;
    let mut commands: Vec<String> = Vec::new();
    let mut config_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a value");
                    std::process::exit(1);
                }
                commands.push(args[i].clone());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if script_path.is_none() {
                    script_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    init_logging();

    let (config, warnings) = sumsheet_core::load_config(config_file.as_ref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = if !commands.is_empty() {
        run_lines(&mut session, commands.into_iter().map(Ok))
    } else if let Some(path) = script_path {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .and_then(|content| {
                let lines: Vec<std::io::Result<String>> = content.lines().map(|l| Ok(l.to_string())).collect();
                run_lines(&mut session, lines)
            })
    } else {
        run_lines(&mut session, std::io::stdin().lock().lines())
    };

    match result {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
