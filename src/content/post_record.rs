use std::path::PathBuf;

use crate::error::FeedError;
use crate::post::{Post, PostDate};
use crate::text_utils::parse_date;

/// Post data as found in the content files, before any validation
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub source: PathBuf,
    pub date: Option<String>,
    pub title: Option<String>,
    pub url: String,
    pub external_url: Option<String>,
}

impl PostRecord {
    pub fn into_post(self) -> Result<Post, FeedError> {
        let date = match self.date.as_deref().map(parse_date) {
            Some(Ok(date)) => PostDate(date),
            _ => return Err(FeedError::MissingDate {
                file: self.source,
                value: self.date,
            }),
        };

        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(FeedError::MissingTitle { file: self.source }),
        };

        Ok(Post::new(date, title, self.url, self.external_url))
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = FeedError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        record.into_post()
    }
}
