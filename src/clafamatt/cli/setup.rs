use clafamatt::host::linearize::Linearization;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LinearizationArg {
    DepthFirst,
    C3,
}

impl From<LinearizationArg> for Linearization {
    fn from(arg: LinearizationArg) -> Self {
        match arg {
            LinearizationArg::DepthFirst => Linearization::DepthFirst,
            LinearizationArg::C3 => Linearization::C3,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "clafamatt", bin_name = "clafamatt", version)]
#[command(about = "Inheritable class-family attributes, demonstrated", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print output as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Ancestry linearization strategy (overrides configuration)
    #[arg(long, value_enum, global = true, help_heading = "Options")]
    pub linearization: Option<LinearizationArg>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH", global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the Shared / Parent / Child walkthrough
    Synopsis,

    /// Show which scopes of a four-level family carry an attribute
    Family {
        /// Attribute to declare and inspect
        #[arg(default_value = "family_name")]
        attr: String,
    },
}
