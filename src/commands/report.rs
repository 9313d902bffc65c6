use std::io::{self, Write};

use crate::config::Config;
use crate::taskwarrior::Invocation;

/// Runs the template's report, which is the template name unless the config overrides it.
#[derive(Debug, PartialEq)]
pub struct Report {
    pub template: String,
    pub report: Option<String>,
}

impl Report {
    pub fn resolve(config: &Config, template: &str) -> Self {
        Report {
            template: template.to_string(),
            report: config.report(template).map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        self.report.as_deref().unwrap_or(&self.template)
    }

    pub fn announce<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(report) = &self.report {
            writeln!(out, "Using the \"{}\" report for \"{}\"", report, self.template)?;
        }
        Ok(())
    }

    pub fn invocation(&self, program: &str) -> Invocation {
        Invocation::new(program, vec![self.name()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_yaml("work:\n  report: workreport\nnext:\n").unwrap()
    }

    #[test]
    fn test_template_name_is_the_report() {
        let report = Report::resolve(&config(), "next");
        assert_eq!(report.invocation("task").args, vec!["next"]);
    }

    #[test]
    fn test_report_override() {
        let report = Report::resolve(&config(), "work");
        assert_eq!(report.invocation("task").args, vec!["workreport"]);
    }

    #[test]
    fn test_name_keeps_typed_case() {
        let report = Report::resolve(&config(), "Next");
        assert_eq!(report.name(), "Next");
    }

    #[test]
    fn test_announce_only_with_override() -> io::Result<()> {
        let mut out = Vec::new();
        Report::resolve(&config(), "next").announce(&mut out)?;
        assert!(out.is_empty());

        Report::resolve(&config(), "work").announce(&mut out)?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "Using the \"workreport\" report for \"work\"\n"
        );
        Ok(())
    }
}
