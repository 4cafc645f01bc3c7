use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Post has no usable date ({}) - file={}", .value.as_deref().unwrap_or("missing"), .file.display())]
    MissingDate {
        file: PathBuf,
        value: Option<String>,
    },

    #[error("Post has no title - file={}", .file.display())]
    MissingTitle {
        file: PathBuf,
    },

    #[error("Invalid front matter: {reason} - file={}", .file.display())]
    FrontMatter {
        file: PathBuf,
        reason: String,
    },

    #[error("Error reading {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FeedError {
    /// Content file the error refers to
    pub fn file(&self) -> &PathBuf {
        match self {
            FeedError::MissingDate { file, .. } => file,
            FeedError::MissingTitle { file } => file,
            FeedError::FrontMatter { file, .. } => file,
            FeedError::Io { file, .. } => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let err = FeedError::MissingDate {
            file: PathBuf::from("_drafts/no-date.md"),
            value: None,
        };
        assert_eq!(err.to_string(), "Post has no usable date (missing) - file=_drafts/no-date.md");

        let err = FeedError::MissingDate {
            file: PathBuf::from("_posts/2015-13-40-bad.md"),
            value: Some("2015-13-40".to_string()),
        };
        assert_eq!(err.to_string(), "Post has no usable date (2015-13-40) - file=_posts/2015-13-40-bad.md");

        let err = FeedError::MissingTitle { file: PathBuf::from("_posts/2015-06-08-x.md") };
        assert_eq!(err.to_string(), "Post has no title - file=_posts/2015-06-08-x.md");
        assert_eq!(err.file(), &PathBuf::from("_posts/2015-06-08-x.md"));
    }
}
