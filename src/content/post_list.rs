use std::{fs, io};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use spdlog::{debug, info};

use crate::content::front_matter::parse_front_matter;
use crate::content::post_record::PostRecord;
use crate::error::FeedError;
use crate::text_utils::{format_url_date, parse_date};

const POST_EXTENSIONS: [&str; 4] = ["md", "markdown", "html", "txt"];

pub struct PostList {
    pub posts_dir: PathBuf,
    pub drafts_dir: Option<PathBuf>,
}

impl PostList {
    /// Reads every post (and draft, if requested), newest first
    pub fn retrieve_records(&self, include_drafts: bool) -> Result<Vec<PostRecord>, FeedError> {
        let mut records = vec![];

        for file in retrieve_files(&self.posts_dir)? {
            records.push(read_record(&file)?);
        }
        info!("Found {} posts in {}", records.len(), self.posts_dir.display());

        if include_drafts {
            if let Some(ref drafts_dir) = self.drafts_dir {
                if drafts_dir.is_dir() {
                    let published = records.len();
                    for file in retrieve_files(drafts_dir)? {
                        records.push(read_record(&file)?);
                    }
                    info!("Found {} drafts in {}", records.len() - published, drafts_dir.display());
                } else {
                    debug!("Drafts directory {} does not exist", drafts_dir.display());
                }
            }
        }

        sort_newest_first(&mut records);
        Ok(records)
    }
}

fn retrieve_files(dir: &Path) -> Result<Vec<PathBuf>, FeedError> {
    let to_feed_error = |source: io::Error| FeedError::Io { file: dir.to_path_buf(), source };

    let mut files = vec![];
    for entry in fs::read_dir(dir).map_err(to_feed_error)? {
        let entry = entry.map_err(to_feed_error)?;
        if !entry.file_type().map_err(to_feed_error)?.is_file() {
            continue;
        }

        let path = entry.path();
        if has_post_extension(&path) {
            files.push(path);
        } else {
            debug!("Skipping {}, not a post file", path.display());
        }
    }
    Ok(files)
}

fn has_post_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| POST_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Posts are named `2015-06-08-post-name.md`. Drafts may drop the date
/// prefix and take the date from the front matter.
fn read_record(path: &Path) -> Result<PostRecord, FeedError> {
    let content = fs::read_to_string(path).map_err(|source| FeedError::Io {
        file: path.to_path_buf(),
        source,
    })?;
    let front_matter = parse_front_matter(path, &content)?;

    let stem = path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let (file_date, slug) = split_post_stem(&stem);

    // Front matter wins over the file name
    let date = front_matter.date().map(|d| d.to_string()).or(file_date);
    let url = match front_matter.permalink() {
        Some(permalink) => permalink.to_string(),
        None => match date.as_deref().map(parse_date) {
            Some(Ok(date)) => post_url(&date, &slug),
            // The record fails validation on its date
            _ => String::new(),
        },
    };

    Ok(PostRecord {
        source: path.to_path_buf(),
        date,
        title: front_matter.title().map(|t| t.to_string()),
        url,
        external_url: front_matter.external_url().map(|u| u.to_string()),
    })
}

fn split_post_stem(stem: &str) -> (Option<String>, String) {
    lazy_static! {
        static ref POST_NAME_REGEX: Regex = Regex::new(r"^(?P<date>\d{4}-\d{1,2}-\d{1,2})-(?P<slug>.+)$").unwrap();
    }

    match POST_NAME_REGEX.captures(stem) {
        Some(cap) => (Some(cap["date"].to_string()), cap["slug"].to_string()),
        None => (None, stem.to_string()),
    }
}

fn post_url(date: &NaiveDate, slug: &str) -> String {
    format!("/{}/{}.html", format_url_date(date), slug)
}

fn sort_newest_first(records: &mut [PostRecord]) {
    let sort_key = |record: &PostRecord| -> Option<NaiveDate> {
        record.date.as_deref().and_then(|d| parse_date(d).ok())
    };

    records.sort_by(|a, b| {
        sort_key(b).cmp(&sort_key(a))
            .then_with(|| b.source.cmp(&a.source))
    });
}
