use std::fmt;
use std::io;
use std::process::{Command, Stdio};

/// A single run of the taskwarrior executable.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<S: ToString, I: IntoIterator<Item = S>>(program: &str, args: I) -> Self {
        Invocation {
            program: program.to_string(),
            args: args.into_iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Running `{}` with \"{}\"", self.program, self.args.join(" "))
    }
}

/// Runs invocations on behalf of the dispatcher and reports the exit code.
pub trait Executor {
    fn execute(&mut self, invocation: &Invocation) -> io::Result<i32>;
}

/// Provides an implementation of [Executor] that spawns the process and lets it write straight
/// to this process' terminal.
pub struct ProcessExecutor {}

impl Executor for ProcessExecutor {
    fn execute(&mut self, invocation: &Invocation) -> io::Result<i32> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        // killed by a signal when there's no code
        Ok(status.code().unwrap_or(1))
    }
}
