//! Saving prompt/response pairs as plain text drafts.

use std::{fs, io::Write, path::PathBuf};

use chrono::{Local, NaiveDateTime};
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::OmneuroError;

/// Prefix of every draft file name.
pub const DRAFT_PREFIX: &str = "draft_";
/// Second resolution, filesystem safe.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes drafts under a root directory, one subdirectory per category.
#[derive(Debug, Clone)]
pub struct DraftWriter {
    root: PathBuf,
}

impl DraftWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DraftWriter { root: root.into() }
    }

    /// Save a draft stamped with the current local time.
    pub fn save(
        &self,
        prompt: &str,
        response: &str,
        category: Option<&str>,
    ) -> Result<PathBuf, OmneuroError> {
        self.save_at(prompt, response, category, Local::now().naive_local())
    }

    /// Save a draft stamped with `timestamp`.
    ///
    /// The draft is written to a temporary file in the target directory and
    /// renamed into place, so a failed write leaves nothing behind. An existing
    /// draft with the same name is left untouched and the call fails instead.
    pub fn save_at(
        &self,
        prompt: &str,
        response: &str,
        category: Option<&str>,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, OmneuroError> {
        let dir = match category.filter(|c| !c.is_empty()) {
            Some(category) => self.root.join(category),
            None => self.root.clone(),
        };
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!(
            "{}{}.txt",
            DRAFT_PREFIX,
            timestamp.format(TIMESTAMP_FORMAT)
        ));
        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(render(prompt, response).as_bytes())?;
        file.flush()?;
        file.persist_noclobber(&path).map_err(|e| e.error)?;

        info!(path = %path.display(), "saved draft");
        Ok(path)
    }
}

/// The on-disk layout of a draft.
fn render(prompt: &str, response: &str) -> String {
    format!("Prompt:\n{}\n\nResponse:\n{}", prompt.trim(), response)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn writes_two_sections_under_category() {
        let dir = tempdir().unwrap();
        let writer = DraftWriter::new(dir.path().join("drafts"));

        let path = writer
            .save_at(
                "  Draft a letter requesting an ADA accommodation.\n",
                "Dear Sir/Madam, ...",
                Some("paralegal"),
                noon(),
            )
            .unwrap();

        assert_eq!(
            path,
            dir.path()
                .join("drafts/paralegal/draft_2024-01-01_12-00-00.txt")
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Prompt:\nDraft a letter requesting an ADA accommodation.\n\nResponse:\nDear Sir/Madam, ..."
        );
    }

    #[test]
    fn response_is_written_verbatim() {
        let dir = tempdir().unwrap();
        let writer = DraftWriter::new(dir.path());
        let path = writer
            .save_at("p", "  indented\n\ntrailing\n", None, noon())
            .unwrap();
        assert_eq!(path.parent().unwrap(), dir.path());
        assert!(fs::read_to_string(path)
            .unwrap()
            .ends_with("Response:\n  indented\n\ntrailing\n"));
    }

    #[test]
    fn same_second_does_not_clobber() {
        let dir = tempdir().unwrap();
        let writer = DraftWriter::new(dir.path());
        let first = writer.save_at("p", "one", Some("c"), noon()).unwrap();

        let err = writer.save_at("p", "two", Some("c"), noon()).unwrap_err();
        assert!(matches!(err, OmneuroError::Io(ref e) if e.kind() == std::io::ErrorKind::AlreadyExists));
        assert!(fs::read_to_string(&first).unwrap().ends_with("one"));

        let entries: Vec<_> = fs::read_dir(first.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries, vec![first]);
    }

    #[test]
    fn unwritable_root_propagates() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("drafts");
        fs::write(&blocker, "not a directory").unwrap();

        let err = DraftWriter::new(&blocker)
            .save("p", "r", Some("paralegal"))
            .unwrap_err();
        assert!(matches!(err, OmneuroError::Io(_)));
    }

    #[test]
    fn save_uses_timestamped_name() {
        let dir = tempdir().unwrap();
        let path = DraftWriter::new(dir.path())
            .save("p", "r", Some("paralegal"))
            .unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        let stamp = name
            .strip_prefix(DRAFT_PREFIX)
            .and_then(|n| n.strip_suffix(".txt"))
            .unwrap();
        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
