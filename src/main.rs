#[cfg(not(feature = "cli"))]
compile_error!("The `segyhdr` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::process;
use std::sync::Arc;

use segy::cli;
use segy::cli::app::{Cli, ColorMode, Commands};
use segy::util::audit::AuditLogger;
use segy::SegyError;

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let writer_result: Result<Box<dyn Write>, SegyError> = match &cli.output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| SegyError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    };

    let mut writer = match writer_result {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let audit_logger: Option<Arc<AuditLogger>> = match &cli.audit_log {
        Some(path) => {
            let logger = match AuditLogger::open(path) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            let args: Vec<String> = std::env::args().collect();
            if let Err(e) = logger.start_session(args) {
                eprintln!("Warning: {}", e);
            }
            Some(Arc::new(logger))
        }
        None => None,
    };

    let result = match cli.command {
        Commands::Show { file, json } => {
            cli::show::execute(&cli::show::ShowOptions { file, json }, &mut writer)
        }

        Commands::Text {
            file,
            numbered,
            json,
        } => cli::text::execute(
            &cli::text::TextOptions {
                file,
                numbered,
                json,
            },
            &mut writer,
        ),

        Commands::Header {
            file,
            field,
            legacy,
            json,
        } => cli::header::execute(
            &cli::header::HeaderOptions {
                file,
                field,
                legacy,
                json,
            },
            &mut writer,
        ),

        Commands::Info { file, json } => {
            cli::info::execute(&cli::info::InfoOptions { file, json }, &mut writer)
        }

        Commands::Dump { file, field, raw } => {
            cli::dump::execute(&cli::dump::DumpOptions { file, field, raw }, &mut writer)
        }

        Commands::Set {
            file,
            write,
            set,
            dry_run,
            json,
        } => cli::set::execute(
            &cli::set::SetOptions {
                file,
                write,
                assignments: set,
                dry_run,
                json,
                audit_logger: audit_logger.clone(),
            },
            &mut writer,
        ),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "segyhdr", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Some(ref logger) = audit_logger {
        let _ = logger.end_session();
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
