use std::path::PathBuf;

use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "taskhelper",
    about = "Taskwarrior helper that runs reports and adds tasks from templates",
    setting = AppSettings::TrailingVarArg
)]
struct ProtoOpt {
    /// Add a new task with the template, even when no task description is given.
    #[structopt(short, long)]
    add: bool,

    /// Path to the configuration file. When set, the config directory is not searched.
    #[structopt(short, long)]
    config: Option<String>,

    /// The directory searched for a taskhelper.yaml, taskhelper.yml or taskhelper file.
    #[structopt(long, default_value = "~/.config/taskhelper")]
    config_dir: String,

    /// The taskwarrior executable to run.
    #[structopt(long, default_value = "task")]
    task_bin: String,

    /// A template name from the config, or a taskwarrior command to run as-is, followed by the
    /// words describing the task being added. Options must come before the template; every word
    /// after it is kept as written, including ones starting with a hyphen.
    #[structopt(
        name = "TEMPLATE",
        required = true,
        min_values = 1,
        allow_hyphen_values = true
    )]
    words: Vec<String>,
}

pub struct Opt {
    pub add: bool,
    pub config: Option<PathBuf>,
    pub config_dir: PathBuf,
    pub task_bin: String,
    pub template: String,
    pub args: Vec<String>,
}

impl Opt {
    fn from_proto_opt(proto_opt: ProtoOpt) -> Self {
        let config = proto_opt
            .config
            .map(|config| PathBuf::from(shellexpand::tilde(&config).to_string()));
        let config_dir = PathBuf::from(shellexpand::tilde(&proto_opt.config_dir).to_string());

        // a single positional makes clap stop parsing flags as soon as the template is seen
        let mut words = proto_opt.words.into_iter();
        let template = words.next().unwrap_or_default();

        Opt {
            add: proto_opt.add,
            config,
            config_dir,
            task_bin: proto_opt.task_bin,
            template,
            args: words.collect(),
        }
    }

    pub fn from_args() -> Self {
        Self::from_proto_opt(ProtoOpt::from_args())
    }

    #[cfg(test)]
    pub fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self::from_proto_opt(ProtoOpt::from_iter(iter))
    }
}
