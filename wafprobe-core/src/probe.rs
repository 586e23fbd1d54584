use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use wafprobe_scanner::{
    DEFAULT_TIMEOUT, ProbeEvent, ProbeResult, ProbeTarget, Prober, ScanError, Verdict,
};

use crate::targets::default_targets;

/// Receives each per-request console line
pub type ProbeLineCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Options for configuring a probe run
pub struct ProbeOptions {
    pub domain: String,
    pub targets: Vec<ProbeTarget>,
    pub timeout: Duration,
    pub show_progress: bool,
    pub line_callback: Option<ProbeLineCallback>,
}

impl ProbeOptions {
    /// Built-in targets, 10 second timeout, progress shown
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            targets: default_targets(),
            timeout: DEFAULT_TIMEOUT,
            show_progress: true,
            line_callback: None,
        }
    }

    pub fn with_targets(mut self, targets: Vec<ProbeTarget>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Send request/result lines here instead of stdout
    pub fn with_line_callback(mut self, callback: ProbeLineCallback) -> Self {
        self.line_callback = Some(callback);
        self
    }
}

/// Line printed before a request goes out
pub fn format_request_line(order: usize, url: &str, label: &str) -> String {
    format!(
        "[{}] requesting {} {}",
        order.to_string().bright_white().bold(),
        url,
        format!("({})", label).bright_black()
    )
}

/// Line printed once a request has been classified
pub fn format_result_line(result: &ProbeResult) -> String {
    let summary = format!("{} ({})", result.outcome.status_cell(), result.description);
    let summary = match result.outcome.verdict() {
        Verdict::Succeeded => summary.green(),
        Verdict::Blocked => summary.red(),
        Verdict::NotFound => summary.yellow(),
        Verdict::Other => summary.cyan(),
        Verdict::RequestError => summary.magenta(),
    };
    format!("    {} {}", "→".blue(), summary)
}

/// Print above the bar while it is drawn, straight to stdout otherwise.
/// A bar drawing to a non-terminal is hidden and drops `println` calls.
fn console_line_callback(progress_bar: Option<Arc<ProgressBar>>) -> ProbeLineCallback {
    Arc::new(move |line: String| match progress_bar {
        Some(ref pb) if !pb.is_hidden() => pb.println(line),
        _ => println!("{}", line),
    })
}

/// Execute a probe run with the given options.
///
/// One line is emitted before and one after every request, whether or not
/// the progress bar is shown.
pub async fn execute_probe(options: ProbeOptions) -> Result<Vec<ProbeResult>, ScanError> {
    let ProbeOptions {
        domain,
        targets,
        timeout,
        show_progress,
        line_callback,
    } = options;

    let progress_bar = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(Arc::new(pb))
    } else {
        None
    };

    let emit_line = line_callback.unwrap_or_else(|| console_line_callback(progress_bar.clone()));
    let pb_clone = progress_bar.clone();
    let prober = Prober::with_timeout(timeout)?.with_progress_callback(Arc::new(
        move |event: ProbeEvent| match event {
            ProbeEvent::Started {
                order, url, label, ..
            } => {
                emit_line(format_request_line(order, &url, &label));
                if let Some(ref pb) = pb_clone {
                    pb.set_message(label);
                }
            }
            ProbeEvent::Finished(result) => {
                emit_line(format_result_line(&result));
                if let Some(ref pb) = pb_clone {
                    pb.inc(1);
                }
            }
        },
    ));

    let results = prober.probe(&domain, &targets).await;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    Ok(results)
}
