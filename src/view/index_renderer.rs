use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

#[derive(ramhorns::Content)]
struct IndexPage<'a> {
    post_list: Vec<FeedItem<'a>>,
    post_count: i64,
}

#[derive(ramhorns::Content)]
struct FeedItem<'a> {
    line: &'a str,
}

/// Embeds the feed lines in a page template.
/// Lines are already markup, so templates should use `{{{line}}}`.
pub struct IndexRenderer<'a> {
    pub template: Template<'a>,
}

impl IndexRenderer<'_> {
    pub fn new(index_tpl_src: &str) -> io::Result<IndexRenderer<'_>> {
        let template = match Template::new(index_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing index template: {}", e)));
            }
        };

        Ok(IndexRenderer { template })
    }

    pub fn render(&self, lines: &[String]) -> String {
        let post_list: Vec<FeedItem> = lines.iter()
            .map(|line| FeedItem { line: line.as_str() })
            .collect();

        self.template.render(&IndexPage {
            post_count: post_list.len() as i64,
            post_list,
        })
    }
}
