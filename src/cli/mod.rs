pub mod args;

use std::path::Path;

use crate::core::config::Config;
use crate::core::error::ExposeError;
use crate::core::expose;
use crate::core::paths;
use crate::core::workspace;

use self::args::Cli;

pub fn run(cli: Cli) -> Result<(), ExposeError> {
    let config = Config::load()?;
    let workspace = workspace::resolve(cli.gopath.as_deref(), &config)?;

    let code_root = expose::resolve_code_root(&cli.code_path, cli.allow_relative)?;

    let project_name = match cli.project_name {
        Some(name) => name,
        None if !cli.no_guess => {
            let guess = expose::guess_project_name(&code_root);
            if let Some(parent) = &guess.src_parent {
                println!("{}", paths::to_slash(parent));
            }
            guess.name
        }
        None => String::new(),
    };

    expose::validate_project_name(&project_name)?;

    println!("{}", confirmation(&code_root, &project_name, &workspace));

    expose::link(&workspace, &project_name, &code_root)
}

fn confirmation(code_root: &Path, name: &str, workspace: &Path) -> String {
    format!(
        "Exposing \"{}\" as \"{}\" at \"{}\"",
        paths::to_slash(code_root),
        name,
        paths::to_slash(workspace)
    )
}
