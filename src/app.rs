use crate::{
    args::Args,
    catalog::{FileCatalog, FOLDERS},
    commands::{self, Ack, Command, DispatchError, UploadItem},
    entry::{EntryId, FileEntry},
    filter::{self, SortKey},
    view::{Scope, ViewMode, ViewState},
};
use ratatui::widgets::ListState;
use std::time::SystemTime;

/// What keystrokes currently mean: browsing, editing the search query, or
/// naming a new folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
    NewFolder { buffer: String },
}

/// Application state
pub struct App {
    pub catalog: FileCatalog,
    pub view: ViewState,
    pub state: ListState,
    pub input: InputMode,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub show_help: bool,
    pub sort_key: SortKey,
    pub sort_ascending: bool,
    /// Columns the grid was last laid out with; drives left/right motion.
    pub grid_columns: usize,
}

impl App {
    pub fn new(catalog: FileCatalog, args: &Args) -> Self {
        let view = ViewState::new(args.initial_scope(), args.initial_mode());
        let mut app = Self {
            catalog,
            view,
            state: ListState::default(),
            input: InputMode::Browse,
            status_message: None,
            status_is_error: false,
            show_help: false,
            sort_key: SortKey::CatalogOrder,
            sort_ascending: true,
            grid_columns: 4,
        };
        app.reset_selection();
        app
    }

    /// The rendered listing: scope entries, filtered by the query, under
    /// the current sort. Recomputed on every call, never cached.
    pub fn visible_entries(&self) -> Vec<&FileEntry> {
        let listed = self.catalog.list(&self.view.scope);
        let mut entries = filter::visible(&listed, &self.view.search_query);
        filter::apply_sort(&mut entries, self.sort_key, self.sort_ascending);
        entries
    }

    pub fn visible_len(&self) -> usize {
        self.visible_entries().len()
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        let index = self.state.selected()?;
        self.visible_entries().get(index).map(|e| e.id)
    }

    fn reset_selection(&mut self) {
        if self.visible_len() == 0 {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    /// Keep the selection inside the listing after it shrinks.
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        match self.state.selected() {
            Some(_) if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None if len > 0 => self.state.select(Some(0)),
            _ => {}
        }
    }

    pub fn next(&mut self) {
        self.step_selection(1);
    }

    pub fn previous(&mut self) {
        self.step_selection_back(1);
    }

    /// In grid view, vertical motion jumps a whole row.
    pub fn down(&mut self) {
        match self.view.mode {
            ViewMode::List => self.step_selection(1),
            ViewMode::Grid => self.step_selection(self.grid_columns.max(1)),
        }
    }

    pub fn up(&mut self) {
        match self.view.mode {
            ViewMode::List => self.step_selection_back(1),
            ViewMode::Grid => self.step_selection_back(self.grid_columns.max(1)),
        }
    }

    fn step_selection(&mut self, by: usize) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if by == 1 && i >= len - 1 => 0,
            Some(i) => (i + by).min(len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn step_selection_back(&mut self, by: usize) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) if by == 1 => len - 1,
            Some(i) => i.saturating_sub(by),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        self.step_selection(10);
    }

    pub fn page_up(&mut self) {
        self.step_selection_back(10);
    }

    pub fn go_to_first(&mut self) {
        if self.visible_len() > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn go_to_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    pub fn navigate_to(&mut self, scope: Scope) {
        self.view.navigate(scope);
        self.reset_selection();
    }

    /// Jump to the n-th sidebar slot: the five locations, then folders.
    pub fn navigate_to_slot(&mut self, slot: usize) {
        let scope = match slot {
            1 => Some(Scope::MyFiles),
            2 => Some(Scope::Shared),
            3 => Some(Scope::Recent),
            4 => Some(Scope::Starred),
            5 => Some(Scope::Trash),
            n => FOLDERS
                .get(n.wrapping_sub(6))
                .map(|(_, path)| Scope::Folder((*path).to_string())),
        };
        if let Some(scope) = scope {
            self.navigate_to(scope);
        }
    }

    /// Open the selected entry: enter a folder, preview a file.
    pub fn open_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let target = match self.catalog.entry(id) {
            Some(entry) if entry.kind.is_folder() => {
                Some(Scope::Folder(FileCatalog::folder_path(entry)))
            }
            Some(_) => None,
            None => return,
        };
        match target {
            Some(scope) => self.navigate_to(scope),
            None => self.run(Command::Preview(id)),
        }
    }

    /// Go back to the previous location
    pub fn go_back(&mut self) {
        if self.view.back() {
            self.reset_selection();
        }
    }

    pub fn toggle_view_mode(&mut self) {
        self.view.mode = self.view.mode.toggled();
        self.set_status(format!("View: {}", self.view.mode.name()), false);
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_key = key;
            self.sort_ascending = true;
        }
        let order = if self.sort_ascending { "asc" } else { "desc" };
        self.set_status(format!("Sort: {} {}", self.sort_key.name(), order), false);
        self.clamp_selection();
    }

    // Command helpers; each surfaces the ack or the error on the status line.

    pub fn preview_selected(&mut self) {
        self.run_on_selected(Command::Preview);
    }

    pub fn download_selected(&mut self) {
        self.run_on_selected(Command::Download);
    }

    pub fn share_selected(&mut self) {
        self.run_on_selected(Command::Share);
    }

    pub fn copy_selected(&mut self) {
        self.run_on_selected(Command::Copy);
    }

    pub fn star_selected(&mut self) {
        self.run_on_selected(Command::Star);
    }

    pub fn delete_selected(&mut self) {
        self.run_on_selected(Command::Delete);
    }

    /// Stub drag-and-drop ingestion: one fixed, deterministic batch.
    pub fn upload_demo_batch(&mut self) {
        let batch = vec![
            UploadItem::new("Quarterly Update.pdf", 1_400_000),
            UploadItem::new("Whiteboard.png", 860_000),
        ];
        self.run(Command::UploadFiles(batch));
    }

    pub fn begin_search(&mut self) {
        self.input = InputMode::Search;
        self.status_message = None;
    }

    pub fn begin_new_folder(&mut self) {
        self.input = InputMode::NewFolder { buffer: String::new() };
        self.status_message = None;
    }

    /// Feed one typed character to the active editor.
    pub fn push_input(&mut self, c: char) {
        match &mut self.input {
            InputMode::Browse => {}
            InputMode::Search => {
                self.view.search_query.push(c);
                self.clamp_selection();
            }
            InputMode::NewFolder { buffer } => buffer.push(c),
        }
    }

    pub fn pop_input(&mut self) {
        match &mut self.input {
            InputMode::Browse => {}
            InputMode::Search => {
                self.view.search_query.pop();
                self.clamp_selection();
            }
            InputMode::NewFolder { buffer } => {
                buffer.pop();
            }
        }
    }

    /// Esc: leave the editor. Search drops its query; a folder name in
    /// progress is discarded.
    pub fn cancel_input(&mut self) {
        if self.input == InputMode::Search {
            self.view.search_query.clear();
            self.clamp_selection();
        }
        self.input = InputMode::Browse;
    }

    /// Enter: keep the query, or create the named folder.
    pub fn submit_input(&mut self) {
        match std::mem::replace(&mut self.input, InputMode::Browse) {
            InputMode::Browse => {}
            InputMode::Search => {}
            InputMode::NewFolder { buffer } => {
                let name = buffer.trim().to_string();
                if name.is_empty() {
                    self.set_status("Folder name cannot be empty".to_string(), true);
                } else {
                    self.run(Command::CreateFolder(name));
                }
            }
        }
    }

    fn run_on_selected(&mut self, make: fn(EntryId) -> Command) {
        if let Some(id) = self.selected_id() {
            self.run(make(id));
        }
    }

    fn run(&mut self, command: Command) {
        let result = commands::dispatch(
            &mut self.catalog,
            &self.view.scope,
            command,
            SystemTime::now(),
        );
        self.apply(result);
        self.clamp_selection();
    }

    fn apply(&mut self, result: Result<Ack, DispatchError>) {
        match result {
            Ok(ack) => self.set_status(ack, false),
            Err(err) => self.set_status(err.to_string(), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some(message);
        self.status_is_error = is_error;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::args::ViewArg;
    use std::time::Duration;

    fn app_at(location: &str) -> App {
        let args = Args { location: location.to_string(), view: ViewArg::Grid };
        let catalog =
            FileCatalog::seed(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000));
        App::new(catalog, &args)
    }

    #[test]
    fn search_scenario_from_the_sample_drive() {
        let mut app = app_at("/");
        app.begin_search();
        for c in "REPORT".chars() {
            app.push_input(c);
        }
        let names: Vec<&str> = app.visible_entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Annual Report 2024.pdf"]);
    }

    #[test]
    fn query_persists_across_navigation_and_rescopes() {
        let mut app = app_at("/documents");
        app.begin_search();
        app.push_input('o');
        let before: Vec<String> =
            app.visible_entries().iter().map(|e| e.name.clone()).collect();
        assert!(before.iter().all(|n| n.to_lowercase().contains('o')));

        app.navigate_to(Scope::Folder("/images".into()));
        assert_eq!(app.view.search_query, "o");
        assert!(
            app.visible_entries()
                .iter()
                .all(|e| e.home == "/images" && e.name.to_lowercase().contains('o'))
        );
    }

    #[test]
    fn deleting_selected_entry_moves_it_to_trash() {
        let mut app = app_at("/");
        let id = app.selected_id().unwrap();
        app.delete_selected();

        assert!(app.visible_entries().iter().all(|e| e.id != id));
        app.navigate_to(Scope::Trash);
        assert!(app.visible_entries().iter().any(|e| e.id == id));
    }

    #[test]
    fn deletion_clamps_the_selection() {
        let mut app = app_at("/");
        app.go_to_last();
        let last = app.visible_len() - 1;
        assert_eq!(app.state.selected(), Some(last));
        app.delete_selected();
        assert_eq!(app.state.selected(), Some(last - 1));
    }

    #[test]
    fn upload_grows_the_current_scope_by_the_batch_size() {
        let mut app = app_at("/projects");
        let before = app.visible_len();
        app.upload_demo_batch();
        assert_eq!(app.visible_len(), before + 2);
        assert_eq!(
            app.status_message.as_deref(),
            Some("2 file(s) uploaded successfully")
        );
        assert!(!app.status_is_error);
    }

    #[test]
    fn open_selected_enters_folders() {
        let mut app = app_at("/");
        // First seeded entry at the root is the "Project Documents" folder.
        assert_eq!(app.visible_entries()[0].name, "Project Documents");
        app.open_selected();
        assert_eq!(app.view.scope, Scope::Folder("/project documents".into()));
        assert!(app.visible_len() > 0);

        app.go_back();
        assert_eq!(app.view.scope, Scope::MyFiles);
    }

    #[test]
    fn star_from_the_app_is_an_involution() {
        let mut app = app_at("/");
        app.go_to_last();
        let id = app.selected_id().unwrap();
        let before = app.catalog.entry(id).unwrap().starred;
        app.star_selected();
        app.star_selected();
        assert_eq!(app.catalog.entry(id).unwrap().starred, before);
    }

    #[test]
    fn duplicate_folder_surfaces_an_error_status() {
        let mut app = app_at("/");
        app.begin_new_folder();
        for c in "Marketing Assets".chars() {
            app.push_input(c);
        }
        app.submit_input();
        assert!(app.status_is_error);
        assert_eq!(
            app.status_message.as_deref(),
            Some("\"Marketing Assets\" already exists here")
        );
    }

    #[test]
    fn grid_motion_steps_by_row() {
        let mut app = app_at("/");
        app.grid_columns = 4;
        app.go_to_first();
        app.down();
        assert_eq!(app.state.selected(), Some(4));
        app.up();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn cancel_search_clears_the_query() {
        let mut app = app_at("/");
        app.begin_search();
        app.push_input('q');
        assert_eq!(app.visible_len(), 0);
        assert_eq!(app.state.selected(), None);
        app.cancel_input();
        assert!(app.view.search_query.is_empty());
        assert!(app.visible_len() > 0);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn sidebar_slots_reach_every_location() {
        let mut app = app_at("/");
        app.navigate_to_slot(4);
        assert_eq!(app.view.scope, Scope::Starred);
        app.navigate_to_slot(6);
        assert_eq!(app.view.scope, Scope::Folder("/documents".into()));
        app.navigate_to_slot(42);
        assert_eq!(app.view.scope, Scope::Folder("/documents".into()));
    }
}
