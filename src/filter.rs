use crate::entry::FileEntry;
use std::cmp::Ordering;

/// Entries whose name contains `query` case-insensitively, in their
/// original relative order. An empty query passes everything through.
pub fn visible<'a>(entries: &[&'a FileEntry], query: &str) -> Vec<&'a FileEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the catalog's listing order.
    CatalogOrder,
    Name,
    Modified,
    Size,
}

impl SortKey {
    pub fn name(self) -> &'static str {
        match self {
            SortKey::CatalogOrder => "none",
            SortKey::Name => "name",
            SortKey::Modified => "modified",
            SortKey::Size => "size",
        }
    }
}

/// Sort in place by the chosen key; equal keys break ties on id so the
/// result is stable across renders.
pub fn apply_sort(entries: &mut [&FileEntry], key: SortKey, ascending: bool) {
    if key == SortKey::CatalogOrder {
        return;
    }
    entries.sort_by(|a, b| {
        let cmp = match key {
            SortKey::CatalogOrder => Ordering::Equal,
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Modified => a.modified.cmp(&b.modified),
            SortKey::Size => a.kind.size().unwrap_or(0).cmp(&b.kind.size().unwrap_or(0)),
        };
        let cmp = if ascending { cmp } else { cmp.reverse() };
        cmp.then(a.id.cmp(&b.id))
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::entry::{EntryId, EntryKind, FileEntry, MediaType};
    use std::time::{Duration, SystemTime};

    fn file(id: u64, name: &str, size: u64) -> FileEntry {
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(id * 60);
        FileEntry::new(
            EntryId(id),
            name,
            EntryKind::File { media: MediaType::from_extension(name), size },
            "/",
            modified,
        )
    }

    #[test]
    fn empty_query_is_identity() {
        let a = file(1, "Annual Report 2024.pdf", 100);
        let b = file(2, "Team Photo.jpg", 200);
        let entries = vec![&a, &b];
        let out = visible(&entries, "");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, a.id);
        assert_eq!(out[1].id, b.id);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let a = file(1, "Annual Report 2024.pdf", 100);
        let b = file(2, "Team Photo.jpg", 200);
        let entries = vec![&a, &b];

        for query in ["report", "REPORT", "RePoRt"] {
            let out = visible(&entries, query);
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].name, "Annual Report 2024.pdf");
        }
        assert!(visible(&entries, "missing").is_empty());
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let files: Vec<FileEntry> = ["alpha.txt", "beta.txt", "gamma.txt", "beta copy.txt"]
            .iter()
            .enumerate()
            .map(|(i, name)| file(i as u64 + 1, name, 10))
            .collect();
        let refs: Vec<&FileEntry> = files.iter().collect();
        let out = visible(&refs, "beta");
        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["beta.txt", "beta copy.txt"]);
    }

    #[test]
    fn catalog_order_sort_changes_nothing() {
        let a = file(3, "c.txt", 1);
        let b = file(1, "a.txt", 3);
        let c = file(2, "b.txt", 2);
        let mut entries = vec![&a, &b, &c];
        apply_sort(&mut entries, SortKey::CatalogOrder, true);
        let ids: Vec<_> = entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn sort_by_size_breaks_ties_on_id() {
        let a = file(5, "a.txt", 10);
        let b = file(2, "b.txt", 10);
        let c = file(3, "c.txt", 99);
        let mut entries = vec![&a, &b, &c];
        apply_sort(&mut entries, SortKey::Size, true);
        let ids: Vec<_> = entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 5, 3]);

        apply_sort(&mut entries, SortKey::Size, false);
        let ids: Vec<_> = entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![3, 2, 5]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let a = file(1, "banana.txt", 1);
        let b = file(2, "Apple.txt", 1);
        let mut entries = vec![&a, &b];
        apply_sort(&mut entries, SortKey::Name, true);
        assert_eq!(entries[0].name, "Apple.txt");
    }
}
