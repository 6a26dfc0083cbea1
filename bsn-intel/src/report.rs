//! Splitting model output into headers and body lines for display.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ReportLine {
    Header(String),
    Body(String),
}

fn strip_bold(line: &str) -> String {
    line.replace("**", "").trim().trim_end_matches(':').trim().to_string()
}

/// Classify each non-blank line. Only lines opening with the bold marker
/// `**` become headers; numbered list items stay body text as written.
pub fn parse_report(text: &str) -> Vec<ReportLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with("**") {
                ReportLine::Header(strip_bold(line))
            } else {
                ReportLine::Body(line.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_lines_are_headers() {
        let text = "**Visual Observations**\n\
                    The water is brown with surface foam near the ghat.\n\
                    \n\
                    **Estimated Turbidity Level**\n\
                    High\n\
                    **Recommended Action:** dispatch a sampling team";
        assert_eq!(
            parse_report(text),
            vec![
                ReportLine::Header("Visual Observations".into()),
                ReportLine::Body("The water is brown with surface foam near the ghat.".into()),
                ReportLine::Header("Estimated Turbidity Level".into()),
                ReportLine::Body("High".into()),
                ReportLine::Header("Recommended Action: dispatch a sampling team".into()),
            ]
        );
    }

    #[test]
    fn numbered_items_stay_body_text() {
        let text = "**Potential Contaminants**\n1. Sewage discharge\n2) Detergent foam";
        assert_eq!(
            parse_report(text),
            vec![
                ReportLine::Header("Potential Contaminants".into()),
                ReportLine::Body("1. Sewage discharge".into()),
                ReportLine::Body("2) Detergent foam".into()),
            ]
        );
        assert!(matches!(parse_report("2024 was a dry year")[0], ReportLine::Body(_)));
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(parse_report("\n  \n").is_empty());
    }
}
