//! Locating the automated summary inside one section

use chronicler_core::config::SummaryConfig;

/// Extracts the text between a start and an end marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryExtractor {
    start_marker: String,
    end_marker: String,
}

impl SummaryExtractor {
    /// Create an extractor with explicit markers
    pub fn new(start_marker: impl Into<String>, end_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
        }
    }

    /// Create an extractor from configuration
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(&config.start_marker, &config.end_marker)
    }

    /// Summary text of a section.
    ///
    /// Takes everything after the first start marker up to the next end
    /// marker (or the end of the section), trimmed. `None` when the start
    /// marker is absent or nothing but whitespace follows it.
    pub fn extract<'a>(&self, section: &'a str) -> Option<&'a str> {
        let start = section.find(&self.start_marker)? + self.start_marker.len();
        let rest = &section[start..];
        let end = rest.find(&self.end_marker).unwrap_or(rest.len());

        let summary = rest[..end].trim();
        (!summary.is_empty()).then_some(summary)
    }
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::from_config(&SummaryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_between_markers() {
        let extractor = SummaryExtractor::default();
        let section = "### PR: A\n## Summary by CodeRabbit\n* **Bug Fixes**\nFix crash\n<sub>x</sub>";
        assert_eq!(extractor.extract(section), Some("* **Bug Fixes**\nFix crash"));
    }

    #[test]
    fn test_missing_start_marker() {
        let extractor = SummaryExtractor::default();
        assert_eq!(extractor.extract("just a description\n<sub>x</sub>"), None);
    }

    #[test]
    fn test_missing_end_marker_runs_to_end() {
        let extractor = SummaryExtractor::default();
        let section = "## Summary by CodeRabbit\n\n* **Tests**\nAdd coverage\n";
        assert_eq!(extractor.extract(section), Some("* **Tests**\nAdd coverage"));
    }

    #[test]
    fn test_end_marker_before_start_is_ignored() {
        let extractor = SummaryExtractor::default();
        let section = "<sub>early</sub>\n## Summary by CodeRabbit\nbody\n<sub>late</sub>";
        assert_eq!(extractor.extract(section), Some("body"));
    }

    #[test]
    fn test_first_start_marker_wins() {
        let extractor = SummaryExtractor::new("START", "END");
        assert_eq!(extractor.extract("START one END START two END"), Some("one"));
    }

    #[test]
    fn test_blank_summary_is_none() {
        let extractor = SummaryExtractor::default();
        assert_eq!(extractor.extract("## Summary by CodeRabbit\n   \n<sub>"), None);
    }
}
