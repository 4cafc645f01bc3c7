use std::path::Path;

use serde::Deserialize;

use crate::error::FeedError;

const DELIMITER: &str = "---";

/// YAML block at the top of a content file
///
/// ```text
/// ---
/// layout: post
/// title: "Basic RESTful API versioning in Jersey"
/// external_url: https://example.com/ext
/// tags:
///   - java
/// ---
/// ```
///
/// Keys the feed does not use are ignored.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub layout: Option<String>,
    pub date: Option<String>,
    pub external_url: Option<String>,
    pub permalink: Option<String>,
}

impl FrontMatter {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn external_url(&self) -> Option<&str> {
        self.external_url.as_deref()
    }

    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }
}

pub fn parse_front_matter(file_name: &Path, content: &str) -> Result<FrontMatter, FeedError> {
    let Some(block) = extract_block(file_name, content)? else {
        return Ok(FrontMatter::default());
    };

    // Blank or comments only
    let has_content = block.lines()
        .map(|line| line.trim())
        .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_content {
        return Ok(FrontMatter::default());
    }

    match serde_yaml::from_str::<Option<FrontMatter>>(&block) {
        Ok(front_matter) => Ok(front_matter.unwrap_or_default()),
        Err(e) => Err(FeedError::FrontMatter {
            file: file_name.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn extract_block(file_name: &Path, content: &str) -> Result<Option<String>, FeedError> {
    let mut lines = content.lines();

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        // No front matter at all
        _ => return Ok(None),
    }

    let mut block = String::new();
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Ok(Some(block));
        }
        block.push_str(line);
        block.push('\n');
    }

    Err(FeedError::FrontMatter {
        file: file_name.to_path_buf(),
        reason: "End of front matter is missing".to_string(),
    })
}
