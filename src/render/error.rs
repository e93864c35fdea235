//! Error rendering for offerdash.
//!
//! Human mode prints the message, its code and a hint. JSON and Markdown
//! modes print a failure envelope so scripts always get parseable output.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::models::RobotOutput;
use crate::error::OfferError;

/// Render an error for the given output format.
#[must_use]
pub fn render_error(
    error: &OfferError,
    command: &str,
    format: OutputFormat,
    no_color: bool,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, command, pretty),
        // Md consumers are scripts too; they get the same JSON document.
        OutputFormat::Md => render_error_json(error, command, true),
        OutputFormat::Human if no_color => render_simple(error),
        OutputFormat::Human => render_colored(error),
    }
}

/// Render error as a failure envelope.
#[must_use]
pub fn render_error_json(error: &OfferError, command: &str, pretty: bool) -> String {
    let output = RobotOutput::failure(command, error);
    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    json.unwrap_or_else(|_| render_simple(error))
}

/// Plain text, no ANSI codes.
#[must_use]
pub fn render_simple(error: &OfferError) -> String {
    let mut lines = vec![format!("Error [{}]: {error}", error.error_code())];
    if let Some(hint) = error.hint() {
        lines.push(format!("Hint: {hint}"));
    }
    lines.join("\n")
}

fn render_colored(error: &OfferError) -> String {
    let mut lines = vec![format!(
        "{} {} {}",
        "Error".red().bold(),
        format!("[{}]", error.error_code()).dimmed(),
        error
    )];
    if let Some(hint) = error.hint() {
        lines.push(format!("{} {hint}", "Hint:".yellow()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_contains, assert_no_ansi};

    #[test]
    fn simple_render_includes_code_and_hint() {
        let err = OfferError::InvalidLocation("delhi".into());
        let output = render_simple(&err);
        assert_contains!(&output, "OD-C010");
        assert_contains!(&output, "delhi");
        assert_contains!(&output, "Hint: Valid locations: mumbai, bengaluru");
    }

    #[test]
    fn human_no_color_has_no_ansi() {
        let err = OfferError::CatalogNotFound {
            path: "/tmp/missing.json".into(),
        };
        let output = render_error(&err, "report", OutputFormat::Human, true, false);
        assert_no_ansi!(&output);
        assert_contains!(&output, "/tmp/missing.json");
    }

    #[test]
    fn json_error_is_failure_envelope() {
        let err = OfferError::NoCatalog;
        let output = render_error(&err, "report", OutputFormat::Json, false, false);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["command"], "report");
        assert!(value["data"].is_null());
        assert_eq!(value["errorDetails"][0]["code"], err.error_code());
        assert_eq!(value["errorDetails"][0]["category"], "Input error");
        assert!(!output.contains('\n'));
    }

    #[test]
    fn md_error_is_pretty_json() {
        let err = OfferError::InvalidMonth("soon".into());
        let output = render_error(&err, "report", OutputFormat::Md, false, false);
        assert!(output.contains('\n'));
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }
}
