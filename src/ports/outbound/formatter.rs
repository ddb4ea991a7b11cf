use crate::application::dto::DependencyReport;

/// ReportFormatter port for rendering a dependency report
///
/// Rendering is pure: the same report always yields the same text.
pub trait ReportFormatter {
    /// Renders the report, one line per link and per dependency
    fn format(&self, report: &DependencyReport) -> String;
}
