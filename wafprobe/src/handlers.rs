use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use wafprobe_core::{ProbeOptions, execute_probe, write_report};
use wafprobe_scanner::{ProbeResult, Verdict};

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

/// Prompt on `output` until a non-empty line is read from `input`
pub fn read_domain<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        write!(
            output,
            "{} ",
            "Enter the target domain (e.g. example.com):".bright_cyan().bold()
        )?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read the target domain")?;
        if read == 0 {
            bail!("No target domain entered");
        }

        let domain = line.trim();
        if !domain.is_empty() {
            return Ok(domain.to_string());
        }
    }
}

/// One-line tally of verdicts across a run
pub fn format_summary(results: &[ProbeResult]) -> String {
    let count = |verdict: Verdict| {
        results
            .iter()
            .filter(|r| r.outcome.verdict() == verdict)
            .count()
    };

    format!(
        "{} requests: {} succeeded, {} blocked, {} not found, {} other, {} errors",
        results.len(),
        count(Verdict::Succeeded),
        count(Verdict::Blocked),
        count(Verdict::NotFound),
        count(Verdict::Other),
        count(Verdict::RequestError)
    )
}

/// Probe `domain` with the built-in targets and save the spreadsheet report
/// into the working directory.
pub async fn handle_probe(domain: &str) -> Result<PathBuf> {
    let options = ProbeOptions::new(domain);

    print_divider();
    println!("{}", "  WAF PROBE".bright_white().bold());
    print_divider();
    println!("{} Target: {}", "→".blue(), domain.bright_white());
    println!("{} Requests: {}", "→".blue(), options.targets.len());
    println!(
        "{} Timeout: {}s per request",
        "→".blue(),
        options.timeout.as_secs()
    );
    println!();

    let results = execute_probe(options)
        .await
        .context("Failed to start the probe")?;

    println!();
    println!("{} {}", "✓".green().bold(), format_summary(&results));

    let path = write_report(domain, &results)
        .inspect_err(|e| warn!("Report for {} not written: {}", domain, e))
        .context("Failed to save the report")?;
    Ok(path)
}
