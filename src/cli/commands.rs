use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Identify the UI and runtime technology stack of macOS application bundles
#[derive(Parser, Debug)]
#[command(
    name = "appdetective",
    about = "Identify the UI and runtime technology stack of macOS application bundles",
    version,
    author,
    long_about = "appdetective inspects an application bundle on disk (bundled frameworks, \
                  resources, linked libraries and, as a last resort, embedded strings) and \
                  reports which UI technologies it was built with."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect the technology stack of one or more bundles",
        long_about = "Classifies each given application bundle.\n\n\
                      Exits with status 2 when a single bundle has no resolvable executable.\n\n\
                      Examples:\n  \
                      appdetective detect /Applications/Slack.app\n  \
                      appdetective detect --format json /Applications/Zed.app /Applications/Xcode.app"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Detect every bundle in a directory",
        long_about = "Classifies every *.app directly inside DIR, several at a time.\n\n\
                      Examples:\n  \
                      appdetective scan /Applications\n  \
                      appdetective scan ~/Applications --format yaml --concurrency 8"
    )]
    Scan(ScanArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(value_name = "PATH", required = true, help = "Application bundle(s) to inspect")]
    pub paths: Vec<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "String extraction timeout (overrides APPDETECTIVE_STRINGS_TIMEOUT)"
    )]
    pub strings_timeout: Option<u64>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[arg(value_name = "DIR", help = "Directory containing application bundles")]
    pub directory: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'c',
        long,
        value_name = "N",
        help = "Bundles inspected at once (overrides APPDETECTIVE_MAX_CONCURRENCY)"
    )]
    pub concurrency: Option<usize>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
