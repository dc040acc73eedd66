use crate::{
    error::{Error, Result},
    scorer::{Scorer, TermStat},
};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

const ALLOWED_EXTENSION: &str = ".txt";

/// A single uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Upload {
    pub const fn new(filename: String, content: Vec<u8>) -> Self {
        Self { filename, content }
    }

    /// Reads the file at `path`, named after its last path component.
    pub fn read(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Generic(format!("No file name in {}", path.display())))?;

        Ok(Self::new(filename, fs::read(path)?))
    }
}

/// The ranked words of one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub filename: String,
    pub results: Vec<TermStat>,
}

/// Validates, decodes and scores an upload.
///
/// Only `.txt` filenames are accepted. The content must be valid UTF-8.
pub fn handle_upload(scorer: &Scorer, upload: Upload) -> Result<Ranking> {
    let Upload { filename, content } = upload;

    if !filename.ends_with(ALLOWED_EXTENSION) {
        tracing::warn!(%filename, "rejected upload");
        return Err(Error::UnsupportedFileType(filename));
    }

    let text = String::from_utf8(content)?;
    let results = scorer.score(&text)?;

    tracing::info!(%filename, bytes = text.len(), rows = results.len(), "scored upload");

    Ok(Ranking { filename, results })
}

/// Reads files, and every file below directories, as uploads.
///
/// Paths keep the order they were given in; directory entries are walked in
/// file-name order. Each path carries its own result so one unreadable file
/// does not affect the others.
pub fn collect_uploads(paths: &[PathBuf]) -> Vec<(PathBuf, Result<Upload>)> {
    let mut uploads = Vec::new();

    for path in paths {
        if !path.is_dir() {
            uploads.push((path.clone(), Upload::read(path)));
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let upload = Upload::read(entry.path());
                    uploads.push((entry.into_path(), upload));
                }
                Ok(_) => {}
                Err(e) => {
                    let failed = e.path().unwrap_or(path.as_path()).to_path_buf();
                    uploads.push((failed, Err(e.into())));
                }
            }
        }
    }

    uploads
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scorer() -> Scorer {
        Scorer::new().expect("Failed to create scorer")
    }

    fn upload(filename: &str, content: &[u8]) -> Upload {
        Upload::new(filename.to_string(), content.to_vec())
    }

    #[test]
    fn scores_text_file() {
        let ranking = handle_upload(&scorer(), upload("notes.txt", b"cat, dog. cat!"))
            .expect("Failed to handle upload");

        assert_eq!(ranking.filename, "notes.txt");
        assert_eq!(ranking.results.len(), 2);
        assert_eq!(ranking.results[0].word, "dog");
    }

    #[test]
    fn rejects_other_extensions() {
        let scorer = scorer();

        for filename in ["notes.md", "notes.TXT", "notes.txt.bak", "txt"] {
            let error = handle_upload(&scorer, upload(filename, b"hello"))
                .expect_err("Upload should be rejected");

            assert!(matches!(&error, Error::UnsupportedFileType(name) if name == filename));
            assert_eq!(error.status(), 400);
        }
    }

    #[test]
    fn invalid_utf8() {
        let error = handle_upload(&scorer(), upload("bad.txt", &[0x63, 0x61, 0xff, 0x74]))
            .expect_err("Upload should fail to decode");

        assert!(matches!(error, Error::Decode(_)));
        assert_eq!(error.status(), 500);
        assert!(error.detail().starts_with("Error processing file: "));
    }

    #[test]
    fn empty_file() {
        let error = handle_upload(&scorer(), upload("empty.txt", b" \n"))
            .expect_err("Empty upload should fail");

        assert!(matches!(error, Error::EmptyInput));
        assert_eq!(error.status(), 500);
    }

    #[test]
    fn failures_are_independent() {
        let scorer = scorer();

        assert!(handle_upload(&scorer, upload("a.pdf", b"hello")).is_err());
        assert!(handle_upload(&scorer, upload("b.txt", b"hello")).is_ok());
    }

    fn names(uploads: &[(PathBuf, Result<Upload>)]) -> Vec<String> {
        uploads
            .iter()
            .map(|(path, _)| path.file_name().unwrap_or_default().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn collects_files_and_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("Failed to create nested dir");

        fs::write(dir.path().join("b.txt"), "beta").expect("Failed to write file");
        fs::write(nested.join("a.txt"), "alpha").expect("Failed to write file");
        fs::write(dir.path().join("c.md"), "gamma").expect("Failed to write file");

        let uploads = collect_uploads(&[dir.path().join("b.txt")]);

        assert_eq!(uploads.len(), 1);
        assert_eq!(
            uploads[0].1.as_ref().expect("Failed to read file"),
            &upload("b.txt", b"beta")
        );

        let uploads = collect_uploads(&[dir.path().to_path_buf()]);

        assert_eq!(names(&uploads), vec!["b.txt", "c.md", "a.txt"]);
        assert!(uploads.iter().all(|(_, upload)| upload.is_ok()));
    }

    #[test]
    fn keeps_argument_order() {
        let dir = tempdir().expect("Failed to create temp dir");

        fs::write(dir.path().join("a.txt"), "alpha").expect("Failed to write file");
        fs::write(dir.path().join("z.txt"), "zeta").expect("Failed to write file");

        let uploads = collect_uploads(&[dir.path().join("z.txt"), dir.path().join("a.txt")]);

        assert_eq!(names(&uploads), vec!["z.txt", "a.txt"]);
    }

    #[test]
    fn missing_file_does_not_drop_others() {
        let dir = tempdir().expect("Failed to create temp dir");
        let good = dir.path().join("good.txt");
        fs::write(&good, "hello world").expect("Failed to write file");

        let uploads = collect_uploads(&[good, dir.path().join("missing.txt")]);

        assert_eq!(names(&uploads), vec!["good.txt", "missing.txt"]);
        assert!(matches!(uploads[1].1, Err(Error::IO(_))));

        let scorer = scorer();
        let results: Vec<_> = uploads
            .into_iter()
            .map(|(_, upload)| upload.and_then(|upload| handle_upload(&scorer, upload)))
            .collect();

        let ranking = results[0].as_ref().expect("good.txt should score");
        assert_eq!(ranking.results.len(), 2);
        let error = results[1].as_ref().expect_err("missing.txt should fail");
        assert_eq!(error.status(), 500);
    }
}
