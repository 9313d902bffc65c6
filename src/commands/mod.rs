pub mod add;
pub mod proxy;
pub mod report;

use std::io::Write;

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::opt::Opt;
use crate::taskwarrior::{Executor, Invocation};
use add::Add;
use proxy::Proxy;
use report::Report;

#[derive(Debug, PartialEq)]
pub enum Command {
    Proxy(Proxy),
    Report(Report),
    Add(Add),
}

impl Command {
    /// Picks the action for the first word on the command line.
    ///
    /// Anything that isn't a template is proxied. A template on its own runs its report, and a
    /// template followed by more words (or `--add`) adds a task.
    pub fn resolve(
        config: &Config,
        template: &str,
        args: &[String],
        force_add: bool,
    ) -> Result<Self> {
        if !config.is_template(template) {
            return Ok(Command::Proxy(Proxy::resolve(template, args)));
        }
        if args.is_empty() && !force_add {
            return Ok(Command::Report(Report::resolve(config, template)));
        }
        Ok(Command::Add(Add::resolve(config, template, args)?))
    }

    pub fn invocation(&self, program: &str) -> Invocation {
        match self {
            Command::Proxy(proxy) => proxy.invocation(program),
            Command::Report(report) => report.invocation(program),
            Command::Add(add) => add.invocation(program),
        }
    }

    /// Prints what is about to run, then hands the invocation to the executor and returns its
    /// exit code.
    pub fn execute<E: Executor, W: Write>(
        &self,
        executor: &mut E,
        program: &str,
        out: &mut W,
    ) -> Result<i32> {
        match self {
            Command::Report(report) => report.announce(out)?,
            Command::Add(add) => add.announce(out)?,
            Command::Proxy(_) => {}
        }

        let invocation = self.invocation(program);
        writeln!(out, "{}", invocation)?;
        out.flush()?;

        executor
            .execute(&invocation)
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })
    }
}

pub fn dispatch<E: Executor, W: Write>(
    config: &Config,
    opt: &Opt,
    executor: &mut E,
    out: &mut W,
) -> Result<i32> {
    let command = Command::resolve(config, &opt.template, &opt.args, opt.add)?;
    debug!("resolved `{}` to {:?}", opt.template, command);
    command.execute(executor, &opt.task_bin, out)
}
