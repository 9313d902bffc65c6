use std::io;
use std::process::exit;

use env_logger::Env;

mod commands;
mod config;
mod error;
mod opt;
mod taskwarrior;

use config::Config;
use error::Result;
use opt::Opt;
use taskwarrior::ProcessExecutor;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();
    match run(&opt) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{}", e);
            exit(1)
        }
    }
}

fn run(opt: &Opt) -> Result<i32> {
    // nothing runs without a readable config
    let config = Config::load(opt)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&config, opt, &mut ProcessExecutor {}, &mut out)
}
