//! File-selection acceptance policy.
//!
//! A batch of files is accepted atomically or rejected with a structured
//! reason. A rejected batch never disturbs files that were accepted
//! earlier; the caller keeps its existing selection and surfaces the
//! rejection as component state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-file size ceiling applied when a policy does not override it.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Host-independent description of one candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name as reported by the host.
    pub name: String,
    /// MIME type as reported by the host.
    pub mime: String,
    /// Size in bytes.
    pub bytes: u64,
}

/// Structured, user-facing reason a batch was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileRejection {
    /// The batch was empty.
    #[error("select at least one file")]
    EmptySelection,
    /// Accepting the batch would exceed the file-count limit.
    #[error("you can only upload up to {limit} files")]
    TooManyFiles {
        /// Maximum number of files the policy accepts in total.
        limit: usize,
    },
    /// A file's MIME type is outside the allow-list.
    #[error("`{name}` is not an accepted file type (accepts {accepted})")]
    UnsupportedType {
        /// Offending file name.
        name: String,
        /// Human-readable list of accepted types.
        accepted: String,
    },
    /// A file exceeds the per-file size ceiling.
    #[error("`{name}` is larger than the {limit_bytes} byte limit")]
    Oversized {
        /// Offending file name.
        name: String,
        /// Per-file size ceiling in bytes.
        limit_bytes: u64,
    },
}

/// Acceptance policy for a file-selection surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePolicy {
    /// Maximum number of files held at once.
    pub max_files: usize,
    /// Per-file size ceiling in bytes.
    pub max_bytes: u64,
    /// Accepted MIME types.
    pub accepted_types: Vec<String>,
}

impl Default for FilePolicy {
    fn default() -> Self {
        Self {
            max_files: 1,
            max_bytes: DEFAULT_MAX_FILE_BYTES,
            accepted_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/gif".to_string(),
            ],
        }
    }
}

impl FilePolicy {
    /// Returns the accepted types as a short human-readable list, e.g.
    /// `JPEG, PNG, GIF`.
    pub fn accepted_summary(&self) -> String {
        self.accepted_types
            .iter()
            .map(|mime| {
                mime.split('/')
                    .next_back()
                    .unwrap_or(mime.as_str())
                    .to_uppercase()
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the `accept` attribute value for a file input.
    pub fn accept_attribute(&self) -> String {
        self.accepted_types.join(",")
    }

    /// Checks a new batch against the policy, given how many files the
    /// caller already holds. The whole batch is accepted or the whole
    /// batch is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`FileRejection`]: an empty batch,
    /// then the count limit, then per-file type checks, then per-file
    /// size checks.
    pub fn accept_batch(
        &self,
        already_selected: usize,
        batch: &[FileMeta],
    ) -> Result<(), FileRejection> {
        if batch.is_empty() {
            return Err(FileRejection::EmptySelection);
        }

        if already_selected + batch.len() > self.max_files {
            return Err(FileRejection::TooManyFiles {
                limit: self.max_files,
            });
        }

        if let Some(file) = batch
            .iter()
            .find(|file| !self.accepted_types.iter().any(|mime| *mime == file.mime))
        {
            return Err(FileRejection::UnsupportedType {
                name: file.name.clone(),
                accepted: self.accepted_summary(),
            });
        }

        if let Some(file) = batch.iter().find(|file| file.bytes > self.max_bytes) {
            return Err(FileRejection::Oversized {
                name: file.name.clone(),
                limit_bytes: self.max_bytes,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn png(name: &str, bytes: u64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            mime: "image/png".to_string(),
            bytes,
        }
    }

    fn policy(max_files: usize) -> FilePolicy {
        FilePolicy {
            max_files,
            ..FilePolicy::default()
        }
    }

    #[test]
    fn batch_over_the_count_limit_is_rejected_whole() {
        let batch = vec![png("a.png", 10), png("b.png", 10), png("c.png", 10)];

        let err = policy(2)
            .accept_batch(0, &batch)
            .expect_err("three files exceed a two-file policy");

        assert_eq!(err, FileRejection::TooManyFiles { limit: 2 });
    }

    #[test]
    fn count_limit_includes_files_already_held() {
        let err = policy(2)
            .accept_batch(2, &[png("late.png", 10)])
            .expect_err("the selection is already full");

        assert_eq!(err, FileRejection::TooManyFiles { limit: 2 });
    }

    #[test]
    fn disallowed_type_names_the_file_and_the_accepted_set() {
        let batch = vec![FileMeta {
            name: "report.pdf".to_string(),
            mime: "application/pdf".to_string(),
            bytes: 100,
        }];

        let err = policy(3)
            .accept_batch(0, &batch)
            .expect_err("pdf is outside the allow-list");

        assert_eq!(
            err,
            FileRejection::UnsupportedType {
                name: "report.pdf".to_string(),
                accepted: "JPEG, PNG, GIF".to_string(),
            }
        );
    }

    #[test]
    fn one_oversized_file_rejects_the_batch() {
        let batch = vec![png("ok.png", 100), png("huge.png", DEFAULT_MAX_FILE_BYTES + 1)];

        let err = policy(5)
            .accept_batch(0, &batch)
            .expect_err("one file is over the ceiling");

        assert_eq!(
            err,
            FileRejection::Oversized {
                name: "huge.png".to_string(),
                limit_bytes: DEFAULT_MAX_FILE_BYTES,
            }
        );
    }

    #[test]
    fn empty_batch_is_reported() {
        assert_eq!(
            policy(1).accept_batch(0, &[]),
            Err(FileRejection::EmptySelection)
        );
    }

    #[test]
    fn valid_batch_is_accepted() {
        let batch = vec![png("a.png", 10), png("b.png", 20)];
        assert_eq!(policy(2).accept_batch(0, &batch), Ok(()));
    }

    #[test]
    fn accept_attribute_joins_mime_types() {
        assert_eq!(
            FilePolicy::default().accept_attribute(),
            "image/jpeg,image/png,image/gif"
        );
    }
}
