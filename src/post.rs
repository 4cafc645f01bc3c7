use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::text_utils::format_feed_date;

/// Publication date of a post. Displays as `2015 June 08`
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate(pub NaiveDate);

impl Display for PostDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_feed_date(&self.0))
    }
}

/// A post as seen by the feed. External posts live off-site and link there
/// instead of to the local rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Post {
    Internal {
        date: PostDate,
        title: String,
        url: String,
    },
    External {
        date: PostDate,
        title: String,
        url: String,
        external_url: String,
    },
}

impl Post {
    /// An empty `external_url` is the same as no external url
    pub fn new(date: PostDate, title: String, url: String, external_url: Option<String>) -> Post {
        match external_url {
            Some(external_url) if !external_url.trim().is_empty() => Post::External {
                date,
                title,
                url,
                external_url,
            },
            _ => Post::Internal { date, title, url },
        }
    }

    pub fn date(&self) -> PostDate {
        match self {
            Post::Internal { date, .. } | Post::External { date, .. } => *date,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Post::Internal { title, .. } | Post::External { title, .. } => title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Post::Internal { url, .. } | Post::External { url, .. } => url,
        }
    }

    /// Where the feed links to
    pub fn target(&self) -> &str {
        match self {
            Post::Internal { url, .. } => url,
            Post::External { external_url, .. } => external_url,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Post::External { .. })
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "date={}, title={}, url={}", self.date(), self.title(), self.url())?;
        if let Post::External { external_url, .. } = self {
            write!(f, ", external_url={}", external_url)?;
        }
        Ok(())
    }
}
