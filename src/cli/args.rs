use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "goexpose",
    about = "Expose a code directory under <GOPATH>/src via symlink",
    version,
    after_help = "By default the GOPATH environment variable is used to determine the Go \
                  environment. If the value consists of multiple entries, the last one is \
                  actually used. You can also set GOEXPOSEPATH instead of GOPATH for use \
                  with this command alone."
)]
pub struct Cli {
    /// GOPATH to work with (defaults to $GOEXPOSEPATH, then $GOPATH)
    #[arg(long)]
    pub gopath: Option<String>,

    /// Do not resolve the code path to an absolute path
    #[arg(long)]
    pub allow_relative: bool,

    /// Disable guessing of the project name
    #[arg(long)]
    pub no_guess: bool,

    /// Path to the code directory to expose
    pub code_path: PathBuf,

    /// Name to expose the project under (guessed from the path if omitted)
    pub project_name: Option<String>,
}
