use crate::models::{Application, RevisionHistory};
use thiserror::Error;

/// History lookup errors
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("application '{app_name}' has no deployment with id {id}")]
    NotFound { app_name: String, id: i64 },
}

/// Locate the history entry whose ID equals `id`.
///
/// IDs are unique within an application but not contiguous, so the scan
/// matches on each entry's own ID field, never on array position.
pub fn find_revision_history(
    app: &Application,
    id: i64,
) -> Result<&RevisionHistory, HistoryError> {
    app.status
        .history
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| HistoryError::NotFound {
            app_name: app.metadata.name.clone(),
            id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppMetadata, AppStatus, ApplicationSource};

    fn app_with_ids(ids: &[i64]) -> Application {
        Application {
            metadata: AppMetadata {
                name: "guestbook".to_string(),
                namespace: "default".to_string(),
            },
            status: AppStatus {
                history: ids
                    .iter()
                    .map(|id| RevisionHistory {
                        id: *id,
                        source: ApplicationSource {
                            repo_url: format!("https://git.example.com/r{id}.git"),
                            ..Default::default()
                        },
                        deployed_at: None,
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn finds_entry_by_id_not_position() {
        // ID 2 sits at index 1; index 2 does not exist at all.
        let app = app_with_ids(&[5, 2]);
        let entry = find_revision_history(&app, 2).unwrap();
        assert_eq!(entry.id, 2);
        assert_eq!(entry.source.repo_url, "https://git.example.com/r2.git");
    }

    #[test]
    fn finds_entry_in_non_contiguous_history() {
        let app = app_with_ids(&[1, 4, 9, 12]);
        for id in [1, 4, 9, 12] {
            assert_eq!(find_revision_history(&app, id).unwrap().id, id);
        }
    }

    #[test]
    fn missing_id_is_not_found() {
        let app = app_with_ids(&[5, 2]);
        let err = find_revision_history(&app, 3).unwrap_err();
        let HistoryError::NotFound { app_name, id } = err;
        assert_eq!(app_name, "guestbook");
        assert_eq!(id, 3);
    }

    #[test]
    fn empty_history_is_not_found() {
        let app = app_with_ids(&[]);
        assert!(find_revision_history(&app, 1).is_err());
    }
}
