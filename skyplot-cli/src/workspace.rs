//! Workspace definition
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use crate::{cli::Cli, Error};

/// Workspace, where output products are generated
pub struct Workspace {
    /// Root Fullpath for this session
    pub root: PathBuf,
}

impl Workspace {
    /// Builds a new workspace either
    ///  1. from $SKYPLOT_WORKSPACE environment variable
    ///  2. from -w workspace CLI argument
    ///  3. or defaults to ./WORKSPACE
    pub fn new(cli: &Cli) -> Result<Self, Error> {
        let root = match std::env::var("SKYPLOT_WORKSPACE") {
            Ok(path) => Path::new(&path).to_path_buf(),
            _ => match cli.workspace() {
                Some(path) => path.to_path_buf(),
                None => Path::new("WORKSPACE").to_path_buf(),
            },
        };
        create_dir_all(&root)?;
        info!("session workspace is \"{}\"", root.display());
        Ok(Self { root })
    }
}
