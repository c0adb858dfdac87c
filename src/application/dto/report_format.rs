/// Format of the report written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable edge lists (default)
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Invalid report format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!(ReportFormat::from_str("text").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("TXT").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("Json").unwrap(), ReportFormat::Json);
    }

    #[test]
    fn test_report_format_from_str_invalid() {
        let error = ReportFormat::from_str("markdown").unwrap_err();
        assert!(error.contains("Invalid report format"));
        assert!(error.contains("'text' or 'json'"));
    }

    #[test]
    fn test_report_format_from_str_empty() {
        assert!(ReportFormat::from_str("").is_err());
    }
}
