use colored::Colorize;
use commands::command_argument_builder;
use std::io;
use wafprobe::handlers::{handle_probe, read_domain};

mod commands;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    // Warnings only, so the subscriber does not fight the progress bar
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let domain = match matches.get_one::<String>("DOMAIN") {
        Some(domain) if !domain.trim().is_empty() => domain.trim().to_string(),
        _ => {
            let stdin = io::stdin();
            match read_domain(&mut stdin.lock(), &mut io::stdout()) {
                Ok(domain) => domain,
                Err(e) => {
                    eprintln!("\n{} {:#}", "✗".red().bold(), e);
                    return;
                }
            }
        }
    };

    match handle_probe(&domain).await {
        Ok(path) => println!(
            "\n{} Results saved to '{}'",
            "✓".green().bold(),
            path.display().to_string().bright_white()
        ),
        Err(e) => eprintln!("\n{} {:#}", "✗".red().bold(), e),
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
