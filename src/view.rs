/// A sidebar location. Pseudo-folders (Shared, Recent, Starred, Trash)
/// select entries by flag; `Folder` selects by physical containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    MyFiles,
    Shared,
    Recent,
    Starred,
    Trash,
    Folder(String),
}

impl Scope {
    pub fn label(&self) -> &str {
        match self {
            Scope::MyFiles => "My Files",
            Scope::Shared => "Shared with me",
            Scope::Recent => "Recent",
            Scope::Starred => "Starred",
            Scope::Trash => "Trash",
            Scope::Folder(path) => path
                .rsplit('/')
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or(path),
        }
    }

    /// Folder path uploads and new folders are homed to. Pseudo-folders
    /// fall back to the root.
    pub fn home_path(&self) -> &str {
        match self {
            Scope::Folder(path) => path,
            _ => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// Transient UI state: where the user is, how the listing is shown, and
/// what they are searching for. Reset only by explicit navigation; never
/// persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub scope: Scope,
    pub mode: ViewMode,
    pub search_query: String,
    history: Vec<Scope>,
}

impl ViewState {
    pub fn new(scope: Scope, mode: ViewMode) -> Self {
        Self {
            scope,
            mode,
            search_query: String::new(),
            history: Vec::new(),
        }
    }

    /// Navigate to a new scope, remembering the old one. The search query
    /// deliberately survives navigation.
    pub fn navigate(&mut self, scope: Scope) {
        if scope == self.scope {
            return;
        }
        let previous = std::mem::replace(&mut self.scope, scope);
        self.history.push(previous);
    }

    /// Return to the previous scope, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(scope) => {
                self.scope = scope;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_sidebar() {
        assert_eq!(Scope::MyFiles.label(), "My Files");
        assert_eq!(Scope::Shared.label(), "Shared with me");
        assert_eq!(Scope::Trash.label(), "Trash");
        assert_eq!(Scope::Folder("/documents".into()).label(), "documents");
    }

    #[test]
    fn navigation_keeps_query_and_tracks_history() {
        let mut view = ViewState::new(Scope::MyFiles, ViewMode::Grid);
        view.search_query.push_str("report");

        view.navigate(Scope::Folder("/images".into()));
        assert_eq!(view.scope, Scope::Folder("/images".into()));
        assert_eq!(view.search_query, "report");

        assert!(view.back());
        assert_eq!(view.scope, Scope::MyFiles);
        assert!(!view.back());
    }

    #[test]
    fn navigate_to_current_scope_is_a_no_op() {
        let mut view = ViewState::new(Scope::Recent, ViewMode::List);
        view.navigate(Scope::Recent);
        assert!(!view.back());
    }
}
