use std::io::{self, Write};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::taskwarrior::Invocation;

/// Adds a task, putting the template's `add` arguments ahead of the description words.
#[derive(Debug, PartialEq)]
pub struct Add {
    pub template: String,
    pub add: String,
    pub task: Vec<String>,
}

impl Add {
    pub fn resolve(config: &Config, template: &str, task: &[String]) -> Result<Self> {
        let add = config
            .add(template)
            .ok_or_else(|| Error::MissingAddTemplate(template.to_string()))?;

        Ok(Add {
            template: template.to_string(),
            add: add.to_string(),
            task: task.to_vec(),
        })
    }

    pub fn announce<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Adding a task using \"{}\"", self.template)
    }

    pub fn invocation(&self, program: &str) -> Invocation {
        let mut args = vec!["add".to_string(), self.add.clone()];
        args.extend(self.task.iter().cloned());
        Invocation::new(program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_yaml("work:\n  add: project:work +office\nnext:\n  report: ready\n").unwrap()
    }

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_add_arguments_in_order() -> Result<()> {
        let add = Add::resolve(&config(), "work", &words(&["write", "the", "report"]))?;
        assert_eq!(
            add.invocation("task").args,
            vec!["add", "project:work +office", "write", "the", "report"]
        );
        Ok(())
    }

    #[test]
    fn test_add_without_words() -> Result<()> {
        let add = Add::resolve(&config(), "work", &[])?;
        assert_eq!(add.invocation("task").args, vec!["add", "project:work +office"]);
        Ok(())
    }

    #[test]
    fn test_missing_add_template() {
        match Add::resolve(&config(), "next", &words(&["anything"])) {
            Err(Error::MissingAddTemplate(template)) => assert_eq!(template, "next"),
            other => panic!("expected MissingAddTemplate, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_add_template_message() {
        let err = Add::resolve(&config(), "next", &[]).unwrap_err();
        assert_eq!(err.to_string(), "A Template wasn't found for `next`");
    }
}
