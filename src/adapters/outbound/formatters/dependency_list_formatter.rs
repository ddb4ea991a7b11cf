use crate::application::dto::DependencyReport;
use crate::dependency_lookup::domain::{DependencyMap, DependencySection};
use crate::ports::outbound::ReportFormatter;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

/// DependencyListFormatter adapter for the numbered, colourised dependency list
///
/// Output shape:
///
/// ```text
/// repository https://github.com/chalk/chalk
/// homepage https://github.com/chalk/chalk#readme
/// devDependencies
/// 01 ava (https://npmjs.com/package/ava)
/// dependencies
/// 01 ansi-styles (https://npmjs.com/package/ansi-styles)
/// ```
pub struct DependencyListFormatter {
    registry_url: String,
    color: bool,
}

impl DependencyListFormatter {
    pub fn new(registry_url: impl Into<String>, color: bool) -> Self {
        Self {
            registry_url: registry_url.into().trim_end_matches('/').to_string(),
            color,
        }
    }

    /// Registry page for a dependency
    pub fn package_link(&self, name: &str) -> String {
        format!("{}/package/{}", self.registry_url, name)
    }

    /// Renders one section: its label, then `NN name (link)` per entry in map order
    pub fn format_section(&self, section: DependencySection, dependencies: &DependencyMap) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "{}",
            self.paint(section.label(), Style::new().bright_black().bold())
        );

        for (index, name) in dependencies.keys().enumerate() {
            let serial = format!("{:02}", index + 1);
            let link = self.package_link(name);
            let _ = writeln!(
                output,
                "{} {} ({})",
                self.paint(&serial, Style::new().cyan()),
                self.paint(name, Style::new().cyan()),
                self.paint(&link, Style::new().blue())
            );
        }

        output
    }

    fn format_link_line(&self, label: &str, link: &str) -> String {
        format!(
            "{} {}\n",
            self.paint(label, Style::new().cyan()),
            self.paint(link, Style::new().blue())
        )
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl ReportFormatter for DependencyListFormatter {
    fn format(&self, report: &DependencyReport) -> String {
        let mut output = String::new();

        if let Some(link) = report.links.repository_link.as_deref() {
            output.push_str(&self.format_link_line("repository", link));
        }
        if let Some(link) = report.links.home_page_link.as_deref() {
            output.push_str(&self.format_link_line("homepage", link));
        }

        for (section, dependencies) in report.manifest.sections() {
            output.push_str(&self.format_section(section, dependencies));
        }

        output
    }
}
