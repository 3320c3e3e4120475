use crate::{
    entry::{EntryId, EntryKind, FileEntry, MediaType},
    view::Scope,
};
use std::time::{Duration, SystemTime};

/// Mock plan limit shown in the sidebar gauge.
pub const QUOTA_BYTES: u64 = 10 * 1024 * 1024 * 1024;

/// Sidebar folder shortcuts: display name and folder path.
pub const FOLDERS: &[(&str, &str)] = &[
    ("Documents", "/documents"),
    ("Images", "/images"),
    ("Videos", "/videos"),
    ("Projects", "/projects"),
];

/// In-memory catalog of file and folder entries. One catalog per session;
/// mutations go through `add_*`, `remove`, `set_starred` and `set_trashed`
/// and nothing else.
pub struct FileCatalog {
    entries: Vec<FileEntry>,
    next_id: u64,
}

impl FileCatalog {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_id: 1 }
    }

    /// Demo catalog mirroring the web client's sample drive.
    pub fn seed(now: SystemTime) -> Self {
        let hours = |h: u64| now - Duration::from_secs(h * 3600);
        let days = |d: u64| hours(d * 24);

        let mut catalog = Self::new();
        let seeded: Vec<FileEntry> = vec![
            FileEntry::new(EntryId(0), "Project Documents", EntryKind::Folder, "/", days(2)),
            FileEntry::new(EntryId(0), "Marketing Assets", EntryKind::Folder, "/", days(7)).shared(),
            file("Annual Report 2024.pdf", 2_400_000, "/", hours(3)).starred(),
            file("Team Photo.jpg", 1_800_000, "/", days(1)),
            file("Presentation.pptx", 5_200_000, "/", days(2)).shared(),
            file("Demo Video.mp4", 24_100_000, "/", days(7)),
            file("Spreadsheet.xlsx", 892_000, "/", days(3)),
            file("Archive.zip", 12_500_000, "/", days(7)),
            file("Roadmap.docx", 310_000, "/project documents", days(2)).owned_by("Demo User"),
            file("Meeting Notes.txt", 18_000, "/project documents", days(4)),
            file("Onboarding Guide.pdf", 1_100_000, "/documents", days(5)),
            file("Expense Policy.docx", 96_000, "/documents", days(12)).shared(),
            file("Logo Draft.png", 640_000, "/images", days(1)).starred(),
            file("Banner.jpg", 2_100_000, "/images", days(6)),
            file("Launch Teaser.mp4", 48_000_000, "/videos", days(9)),
            file("Sprint Plan.xlsx", 210_000, "/projects", hours(6)),
            file("Retro Notes.md", 12_000, "/projects", days(3)).owned_by("Demo User"),
        ];
        for entry in seeded {
            catalog.add(entry);
        }
        catalog
    }

    fn mint_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert an entry, assigning it a fresh id. Returns the id.
    pub fn add(&mut self, mut entry: FileEntry) -> EntryId {
        let id = self.mint_id();
        entry.id = id;
        self.entries.push(entry);
        id
    }

    pub fn add_file(&mut self, name: &str, size: u64, home: &str, now: SystemTime) -> EntryId {
        let media = MediaType::from_extension(name);
        self.add(FileEntry::new(EntryId(0), name, EntryKind::File { media, size }, home, now))
    }

    pub fn add_folder(&mut self, name: &str, home: &str, now: SystemTime) -> EntryId {
        self.add(FileEntry::new(EntryId(0), name, EntryKind::Folder, home, now))
    }

    pub fn remove(&mut self, id: EntryId) -> Option<FileEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn entry(&self, id: EntryId) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut FileEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn set_starred(&mut self, id: EntryId, value: bool) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.starred = value;
                true
            }
            None => false,
        }
    }

    pub fn set_trashed(&mut self, id: EntryId, value: bool) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.trashed = value;
                true
            }
            None => false,
        }
    }

    /// Entries in scope, in catalog order. Trashed entries appear only in
    /// the Trash scope; Recent is ordered most recent first, ties on id.
    pub fn list(&self, scope: &Scope) -> Vec<&FileEntry> {
        let mut listed: Vec<&FileEntry> = self
            .entries
            .iter()
            .filter(|e| match scope {
                Scope::MyFiles => !e.trashed && e.home == "/",
                Scope::Folder(path) => !e.trashed && e.home == *path,
                Scope::Shared => !e.trashed && e.shared,
                Scope::Starred => !e.trashed && e.starred,
                Scope::Recent => !e.trashed,
                Scope::Trash => e.trashed,
            })
            .collect();
        if *scope == Scope::Recent {
            listed.sort_by(|a, b| b.modified.cmp(&a.modified).then(a.id.cmp(&b.id)));
        }
        listed
    }

    pub fn count(&self, scope: &Scope) -> usize {
        self.list(scope).len()
    }

    /// Folder path a folder entry navigates into.
    pub fn folder_path(entry: &FileEntry) -> String {
        let slug = entry.name.to_lowercase();
        if entry.home == "/" {
            format!("/{slug}")
        } else {
            format!("{}/{slug}", entry.home)
        }
    }

    /// Bytes consumed by every file in the drive, trash included.
    pub fn used_bytes(&self) -> u64 {
        self.entries.iter().filter_map(|e| e.kind.size()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FileCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn file(name: &str, size: u64, home: &str, modified: SystemTime) -> FileEntry {
    let media = MediaType::from_extension(name);
    FileEntry::new(EntryId(0), name, EntryKind::File { media, size }, home, modified)
}
