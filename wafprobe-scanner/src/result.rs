use serde::{Deserialize, Serialize};

/// A single path to request, paired with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeTarget {
    pub path: String,
    pub label: String,
}

impl ProbeTarget {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// How the WAF (or the network) answered a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Succeeded,
    Blocked,
    NotFound,
    Other,
    RequestError,
}

impl Verdict {
    pub fn description(&self) -> &'static str {
        match self {
            Verdict::Succeeded => "connection succeeded",
            Verdict::Blocked => "connection blocked",
            Verdict::NotFound => "page not found",
            Verdict::Other => "other response",
            Verdict::RequestError => "request error occurred",
        }
    }
}

pub fn classify_status(status_code: u16) -> Verdict {
    match status_code {
        200 => Verdict::Succeeded,
        403 => Verdict::Blocked,
        404 => Verdict::NotFound,
        _ => Verdict::Other,
    }
}

/// Outcome of one HTTP exchange: either the server answered with a status
/// code, or the request never completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeOutcome {
    Status(u16),
    Failed(String),
}

impl ProbeOutcome {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Status(code) => Some(*code),
            ProbeOutcome::Failed(_) => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Status(_) => None,
            ProbeOutcome::Failed(text) => Some(text),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            ProbeOutcome::Status(code) => classify_status(*code),
            ProbeOutcome::Failed(_) => Verdict::RequestError,
        }
    }

    /// Text shown in the status/error column of the report
    pub fn status_cell(&self) -> String {
        match self {
            ProbeOutcome::Status(code) => code.to_string(),
            ProbeOutcome::Failed(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub order: usize,
    pub label: String,
    pub url: String,
    pub outcome: ProbeOutcome,
    pub description: String,
}

impl ProbeResult {
    pub fn new(order: usize, label: String, url: String, outcome: ProbeOutcome) -> Self {
        let description = outcome.verdict().description().to_string();
        Self {
            order,
            label,
            url,
            outcome,
            description,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.outcome.status_code()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.outcome.error_text()
    }
}
