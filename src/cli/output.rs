//! Output formatting for CLI

use crate::batch::BatchReport;
use crate::validation::IdentifierIssue;

/// Line printed above and below each exported schema
pub const BANNER: &str = "___________________________________________";

/// Format the successful outcomes of a batch, each between banner lines
pub fn format_batch_output(report: &BatchReport) -> String {
    let mut output = String::new();
    for outcome in &report.outcomes {
        if let Ok(content) = &outcome.result {
            output.push_str(BANNER);
            output.push('\n');
            output.push_str(content);
            output.push('\n');
            output.push_str(BANNER);
            output.push('\n');
        }
    }
    output
}

/// Format the failures and counts of a batch
pub fn format_batch_summary(report: &BatchReport) -> String {
    let mut output = String::new();

    let failures: Vec<_> = report
        .outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().err().map(|e| (&o.data_model, e)))
        .collect();
    if !failures.is_empty() {
        output.push_str("\n⚠️  Failed data models:\n");
        for (data_model, error) in failures {
            output.push_str(&format!("  - {}: {}\n", data_model, error));
        }
    }

    output.push_str(&format!(
        "\n{} {} of {} data model(s) of {} converted\n",
        if report.is_success() { "✅" } else { "❌" },
        report.succeeded(),
        report.outcomes.len(),
        report.subject
    ));
    output
}

/// Format identifier findings
pub fn format_identifier_issues(issues: &[IdentifierIssue]) -> String {
    if issues.is_empty() {
        return String::new();
    }
    let mut output = String::from("\n⚠️  Identifiers that may need quoting:\n");
    for issue in issues {
        output.push_str(&format!("  - {}\n", issue));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchOutcome;
    use crate::convert::ConversionError;
    use crate::loader::LoadError;

    fn report() -> BatchReport {
        BatchReport {
            subject: "dataModel.Building".to_string(),
            outcomes: vec![
                BatchOutcome {
                    data_model: "Building".to_string(),
                    result: Ok("/* header */\n\nCREATE TABLE Building (name TEXT);".to_string()),
                },
                BatchOutcome {
                    data_model: "Missing".to_string(),
                    result: Err(ConversionError::Load(LoadError::HttpStatus {
                        status: 404,
                        url: "https://example.org/Missing".to_string(),
                    })),
                },
            ],
        }
    }

    #[test]
    fn test_batch_output_wraps_in_banners() {
        let output = format_batch_output(&report());
        assert_eq!(
            output,
            format!(
                "{b}\n/* header */\n\nCREATE TABLE Building (name TEXT);\n{b}\n",
                b = BANNER
            )
        );
    }

    #[test]
    fn test_batch_summary_lists_failures() {
        let summary = format_batch_summary(&report());
        assert!(summary.contains("Missing: HTTP error 404"));
        assert!(summary.contains("1 of 2 data model(s) of dataModel.Building converted"));
    }
}
