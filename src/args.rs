use crate::view::{Scope, ViewMode};
use clap::{Parser, ValueEnum};

/// Samos: a terminal browser for a Samos Cloud drive
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Location to open at startup (e.g. /, /documents, starred, trash)
    #[arg(default_value = "/")]
    pub location: String,

    /// Initial layout for the file listing
    #[arg(short, long, value_enum, default_value = "grid")]
    pub view: ViewArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewArg {
    Grid,
    List,
}

impl Args {
    pub fn initial_scope(&self) -> Scope {
        match self.location.trim_start_matches('/') {
            "" => Scope::MyFiles,
            "shared" => Scope::Shared,
            "recent" => Scope::Recent,
            "starred" => Scope::Starred,
            "trash" => Scope::Trash,
            _ => {
                let path = if self.location.starts_with('/') {
                    self.location.clone()
                } else {
                    format!("/{}", self.location)
                };
                Scope::Folder(path)
            }
        }
    }

    pub fn initial_mode(&self) -> ViewMode {
        match self.view {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::List => ViewMode::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(location: &str) -> Args {
        Args { location: location.to_string(), view: ViewArg::Grid }
    }

    #[test]
    fn known_locations_map_to_scopes() {
        assert_eq!(args("/").initial_scope(), Scope::MyFiles);
        assert_eq!(args("starred").initial_scope(), Scope::Starred);
        assert_eq!(args("/trash").initial_scope(), Scope::Trash);
    }

    #[test]
    fn unknown_locations_become_folder_paths() {
        assert_eq!(args("documents").initial_scope(), Scope::Folder("/documents".into()));
        assert_eq!(args("/images").initial_scope(), Scope::Folder("/images".into()));
    }
}
