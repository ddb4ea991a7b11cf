/// Formatter adapters for the dependency report
mod dependency_list_formatter;

pub use dependency_list_formatter::DependencyListFormatter;
