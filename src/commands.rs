use crate::{catalog::FileCatalog, entry::EntryId, view::Scope};
use std::time::SystemTime;
use thiserror::Error;

/// One incoming file in an upload batch.
#[derive(Debug, Clone)]
pub struct UploadItem {
    pub name: String,
    pub size: u64,
}

impl UploadItem {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }
}

/// User-initiated commands routed through the dispatcher.
#[derive(Debug, Clone)]
pub enum Command {
    Preview(EntryId),
    Download(EntryId),
    Share(EntryId),
    Copy(EntryId),
    Star(EntryId),
    Delete(EntryId),
    UploadFiles(Vec<UploadItem>),
    UploadFolder { name: String, items: Vec<UploadItem> },
    CreateFolder(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("entry {0} no longer exists")]
    NotFound(EntryId),
    #[error("nothing to upload")]
    EmptyBatch,
    #[error("\"{0}\" already exists here")]
    DuplicateName(String),
}

/// Transient acknowledgement surfaced to the user after a command.
pub type Ack = String;

/// Run one command against the catalog. Every command completes within the
/// call; errors are surfaced to the caller and leave the catalog untouched.
pub fn dispatch(
    catalog: &mut FileCatalog,
    scope: &Scope,
    command: Command,
    now: SystemTime,
) -> Result<Ack, DispatchError> {
    match command {
        Command::Preview(id) => acknowledge(catalog, id, "Preview"),
        Command::Download(id) => acknowledge(catalog, id, "Download"),
        Command::Share(id) => acknowledge(catalog, id, "Share"),
        Command::Copy(id) => acknowledge(catalog, id, "Copy"),
        Command::Star(id) => {
            let entry = catalog.entry(id).ok_or(DispatchError::NotFound(id))?;
            let name = entry.name.clone();
            let starring = !entry.starred;
            catalog.set_starred(id, starring);
            if starring {
                Ok(format!("Added star to \"{name}\""))
            } else {
                Ok(format!("Removed star from \"{name}\""))
            }
        }
        Command::Delete(id) => {
            let entry = catalog.entry(id).ok_or(DispatchError::NotFound(id))?;
            let name = entry.name.clone();
            if entry.trashed {
                catalog.remove(id);
                Ok(format!("Deleted \"{name}\" forever"))
            } else {
                catalog.set_trashed(id, true);
                Ok(format!("Moved \"{name}\" to trash"))
            }
        }
        Command::UploadFiles(items) => {
            if items.is_empty() {
                return Err(DispatchError::EmptyBatch);
            }
            let home = scope.home_path().to_owned();
            let count = items.len();
            for item in items {
                catalog.add_file(&item.name, item.size, &home, now);
            }
            Ok(format!("{count} file(s) uploaded successfully"))
        }
        Command::UploadFolder { name, items } => {
            if items.is_empty() {
                return Err(DispatchError::EmptyBatch);
            }
            reject_duplicate_folder(catalog, scope, &name)?;
            let home = scope.home_path().to_owned();
            let count = items.len();
            let id = catalog.add_folder(&name, &home, now);
            let inside = match catalog.entry(id) {
                Some(folder) => FileCatalog::folder_path(folder),
                None => home,
            };
            for item in items {
                catalog.add_file(&item.name, item.size, &inside, now);
            }
            Ok(format!("Uploaded folder \"{name}\" ({count} file(s))"))
        }
        Command::CreateFolder(name) => {
            reject_duplicate_folder(catalog, scope, &name)?;
            catalog.add_folder(&name, scope.home_path(), now);
            Ok(format!("Created folder \"{name}\""))
        }
    }
}

fn acknowledge(catalog: &FileCatalog, id: EntryId, action: &str) -> Result<Ack, DispatchError> {
    let entry = catalog.entry(id).ok_or(DispatchError::NotFound(id))?;
    Ok(format!("{action} performed on \"{}\"", entry.name))
}

fn reject_duplicate_folder(
    catalog: &FileCatalog,
    scope: &Scope,
    name: &str,
) -> Result<(), DispatchError> {
    let clash = catalog
        .list(scope)
        .iter()
        .any(|e| e.kind.is_folder() && e.name.eq_ignore_ascii_case(name));
    if clash {
        Err(DispatchError::DuplicateName(name.to_owned()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn setup() -> (FileCatalog, SystemTime) {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        (FileCatalog::seed(now), now)
    }

    fn id_of(catalog: &FileCatalog, name: &str) -> EntryId {
        catalog
            .list(&Scope::Recent)
            .into_iter()
            .find(|e| e.name == name)
            .unwrap()
            .id
    }

    #[test]
    fn star_twice_restores_original_value() {
        let (mut catalog, now) = setup();
        let id = id_of(&catalog, "Team Photo.jpg");
        let before = catalog.entry(id).unwrap().starred;

        dispatch(&mut catalog, &Scope::MyFiles, Command::Star(id), now).unwrap();
        assert_eq!(catalog.entry(id).unwrap().starred, !before);

        dispatch(&mut catalog, &Scope::MyFiles, Command::Star(id), now).unwrap();
        assert_eq!(catalog.entry(id).unwrap().starred, before);
    }

    #[test]
    fn delete_moves_to_trash_then_deletes_forever() {
        let (mut catalog, now) = setup();
        let id = id_of(&catalog, "Archive.zip");

        let ack = dispatch(&mut catalog, &Scope::MyFiles, Command::Delete(id), now).unwrap();
        assert!(ack.contains("trash"));
        assert!(catalog.list(&Scope::MyFiles).iter().all(|e| e.id != id));
        assert!(catalog.list(&Scope::Trash).iter().any(|e| e.id == id));

        let ack = dispatch(&mut catalog, &Scope::Trash, Command::Delete(id), now).unwrap();
        assert!(ack.contains("forever"));
        assert!(catalog.entry(id).is_none());
        assert!(catalog.list(&Scope::Trash).iter().all(|e| e.id != id));
    }

    #[test]
    fn read_only_actions_do_not_mutate() {
        let (mut catalog, now) = setup();
        let id = id_of(&catalog, "Annual Report 2024.pdf");
        let before = catalog.len();

        for command in [
            Command::Preview(id),
            Command::Download(id),
            Command::Share(id),
            Command::Copy(id),
        ] {
            let ack = dispatch(&mut catalog, &Scope::MyFiles, command, now).unwrap();
            assert!(ack.contains("Annual Report 2024.pdf"));
        }
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn missing_target_is_a_recovered_no_op() {
        let (mut catalog, now) = setup();
        let ghost = EntryId(9_999);
        let before = catalog.len();

        let err = dispatch(&mut catalog, &Scope::MyFiles, Command::Delete(ghost), now);
        assert_eq!(err, Err(DispatchError::NotFound(ghost)));
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn upload_adds_exactly_n_entries_with_fresh_ids() {
        let (mut catalog, now) = setup();
        let scope = Scope::Folder("/images".into());
        let before = catalog.count(&scope);

        let batch = vec![
            UploadItem::new("holiday.png", 500_000),
            UploadItem::new("screenshot.jpg", 120_000),
            UploadItem::new("notes.txt", 2_000),
        ];
        let ack = dispatch(&mut catalog, &scope, Command::UploadFiles(batch), now).unwrap();
        assert_eq!(ack, "3 file(s) uploaded successfully");

        let after = catalog.list(&scope);
        assert_eq!(after.len(), before + 3);
        let mut ids: Vec<_> = after.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), after.len());
    }

    #[test]
    fn empty_batch_is_rejected_before_touching_the_catalog() {
        let (mut catalog, now) = setup();
        let before = catalog.len();
        let err = dispatch(&mut catalog, &Scope::MyFiles, Command::UploadFiles(vec![]), now);
        assert_eq!(err, Err(DispatchError::EmptyBatch));
        let err = dispatch(
            &mut catalog,
            &Scope::MyFiles,
            Command::UploadFolder { name: "Empty".into(), items: vec![] },
            now,
        );
        assert_eq!(err, Err(DispatchError::EmptyBatch));
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn upload_folder_homes_items_inside_the_new_folder() {
        let (mut catalog, now) = setup();
        let items = vec![UploadItem::new("a.txt", 1), UploadItem::new("b.txt", 2)];
        dispatch(
            &mut catalog,
            &Scope::MyFiles,
            Command::UploadFolder { name: "Imports".into(), items },
            now,
        )
        .unwrap();

        assert!(catalog.list(&Scope::MyFiles).iter().any(|e| e.name == "Imports"));
        assert_eq!(catalog.count(&Scope::Folder("/imports".into())), 2);
    }

    #[test]
    fn duplicate_folder_name_conflicts() {
        let (mut catalog, now) = setup();
        let err = dispatch(
            &mut catalog,
            &Scope::MyFiles,
            Command::CreateFolder("marketing assets".into()),
            now,
        );
        assert_eq!(err, Err(DispatchError::DuplicateName("marketing assets".into())));

        dispatch(&mut catalog, &Scope::MyFiles, Command::CreateFolder("Fresh".into()), now)
            .unwrap();
        let err = dispatch(&mut catalog, &Scope::MyFiles, Command::CreateFolder("Fresh".into()), now);
        assert!(matches!(err, Err(DispatchError::DuplicateName(_))));
    }

    #[test]
    fn uploaded_files_infer_media_from_extension() {
        use crate::entry::{EntryKind, MediaType};
        let (mut catalog, now) = setup();
        let batch = vec![UploadItem::new("clip.mp4", 9_000)];
        dispatch(&mut catalog, &Scope::MyFiles, Command::UploadFiles(batch), now).unwrap();

        let uploaded = catalog
            .list(&Scope::MyFiles)
            .into_iter()
            .find(|e| e.name == "clip.mp4")
            .unwrap();
        assert!(matches!(
            uploaded.kind,
            EntryKind::File { media: MediaType::Video, size: 9_000 }
        ));
    }
}
