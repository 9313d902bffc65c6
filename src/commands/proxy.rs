use log::warn;

use crate::taskwarrior::Invocation;

/// Passes a word that isn't a template straight through to taskwarrior.
#[derive(Debug, PartialEq)]
pub struct Proxy {
    pub command: String,
}

impl Proxy {
    pub fn resolve(command: &str, args: &[String]) -> Self {
        // only the command itself is forwarded
        if !args.is_empty() {
            warn!(
                "`{}` is not a template, ignoring {} extra argument(s)",
                command,
                args.len()
            );
        }
        Proxy {
            command: command.to_string(),
        }
    }

    pub fn invocation(&self, program: &str) -> Invocation {
        Invocation::new(program, vec![&self.command])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_args_do_not_leak() {
        let args = vec!["+work".to_string(), "due:today".to_string()];
        let proxy = Proxy::resolve("next", &args);
        assert_eq!(proxy.invocation("task").args, vec!["next"]);
    }
}
