use std::time::SystemTime;

/// Opaque catalog identifier, unique within a snapshot and stable for the
/// entry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Media class of a file, driving its icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Image,
    Video,
    Audio,
    Archive,
    Document,
    Spreadsheet,
    Presentation,
    Other,
}

impl MediaType {
    pub fn from_extension(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, e)| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => MediaType::Pdf,
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" => MediaType::Image,
            "mp4" | "avi" | "mov" | "mkv" => MediaType::Video,
            "mp3" | "wav" | "flac" | "ogg" => MediaType::Audio,
            "zip" | "rar" | "tar" | "gz" | "7z" => MediaType::Archive,
            "doc" | "docx" | "txt" | "md" => MediaType::Document,
            "xls" | "xlsx" | "csv" => MediaType::Spreadsheet,
            "ppt" | "pptx" | "key" => MediaType::Presentation,
            _ => MediaType::Other,
        }
    }

    // Exhaustive on purpose: adding a variant must force an icon choice.
    pub fn glyph(self) -> &'static str {
        match self {
            MediaType::Pdf => "▤",
            MediaType::Image => "▣",
            MediaType::Video => "▶",
            MediaType::Audio => "♪",
            MediaType::Archive => "◫",
            MediaType::Document => "▤",
            MediaType::Spreadsheet => "▦",
            MediaType::Presentation => "▧",
            MediaType::Other => "□",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Archive => "archive",
            MediaType::Document => "document",
            MediaType::Spreadsheet => "spreadsheet",
            MediaType::Presentation => "presentation",
            MediaType::Other => "file",
        }
    }
}

/// Folder or file. Media type and byte size exist only for files, so the
/// "defined iff file" rule holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File { media: MediaType, size: u64 },
}

impl EntryKind {
    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder)
    }

    pub fn size(self) -> Option<u64> {
        match self {
            EntryKind::Folder => None,
            EntryKind::File { size, .. } => Some(size),
        }
    }
}

/// One file or folder record in the catalog.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub id: EntryId,
    pub name: String,
    pub kind: EntryKind,
    /// Path of the folder this entry physically lives in ("/" for the root).
    pub home: String,
    pub modified: SystemTime,
    pub starred: bool,
    pub shared: bool,
    pub trashed: bool,
    pub owner: Option<String>,
}

impl FileEntry {
    pub fn new(id: EntryId, name: impl Into<String>, kind: EntryKind, home: impl Into<String>, modified: SystemTime) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            home: home.into(),
            modified,
            starred: false,
            shared: false,
            trashed: false,
            owner: None,
        }
    }

    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    pub fn shared(mut self) -> Self {
        self.shared = true;
        self
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}
