use serde::Deserialize;

use crate::content::PostRecord;
use crate::error::FeedError;
use crate::post::Post;

/// Markup used for the link in each line
#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub enum LineFormat {
    /// `2015 June 08 - [title](url)`
    #[default]
    Markdown,
    /// `2015 June 08 - <a href="url">title</a>`
    Html,
}

pub struct FeedRenderer {
    pub format: LineFormat,
}

impl FeedRenderer {
    pub fn new(format: LineFormat) -> Self {
        FeedRenderer { format }
    }

    /// One line per post, in the given order
    pub fn render<'a>(&'a self, posts: &'a [Post]) -> impl Iterator<Item = String> + 'a {
        posts.iter().map(move |post| self.render_line(post))
    }

    /// Validates all the records before rendering any of them.
    /// A single malformed record fails the whole feed.
    pub fn render_records<I>(&self, records: I) -> Result<Vec<String>, FeedError>
    where
        I: IntoIterator<Item = PostRecord>,
    {
        let posts = records.into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.render(&posts).collect())
    }

    pub fn render_line(&self, post: &Post) -> String {
        let link = match self.format {
            LineFormat::Markdown => markdown_link(post),
            LineFormat::Html => html_link(post),
        };

        match post {
            Post::Internal { date, .. } => format!("{} - {}", date, link),
            Post::External { date, .. } => format!("{} - {} (external)", date, link),
        }
    }
}

impl Default for FeedRenderer {
    fn default() -> Self {
        FeedRenderer::new(LineFormat::default())
    }
}

fn markdown_link(post: &Post) -> String {
    format!("[{}]({})", escape_markdown(post.title()), markdown_destination(post.target()))
}

/// Targets with spaces or brackets go inside `<...>`, where only `<`, `>` and `\` need escaping
fn markdown_destination(target: &str) -> String {
    let needs_brackets = target.chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>'));
    if !needs_brackets {
        return target.to_string();
    }

    let mut destination = String::with_capacity(target.len() + 2);
    destination.push('<');
    for c in target.chars() {
        if matches!(c, '<' | '>' | '\\') {
            destination.push('\\');
        }
        destination.push(c);
    }
    destination.push('>');
    destination
}

fn html_link(post: &Post) -> String {
    let href = escape_html(post.target());
    let title = escape_html(post.title());
    match post {
        Post::Internal { .. } => format!(r#"<a href="{}">{}</a>"#, href, title),
        Post::External { .. } => format!(r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#, href, title),
    }
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;

    use crate::post::PostDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> PostDate {
        PostDate(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            Post::new(date(2017, 9, 1),
                      "Optimizing MySQL UUID-based IDs".to_string(),
                      "/2017/09/01/optimized-uuid-with-hibernate.html".to_string(),
                      None),
            Post::new(date(2013, 4, 23),
                      "Basic RESTful API versioning in Jersey".to_string(),
                      "/2013/04/23/basic-restful-api-versioning-in-jersey.html".to_string(),
                      Some("https://example.com/ext".to_string())),
        ]
    }

    fn record(source: &str, date: Option<&str>, title: Option<&str>) -> PostRecord {
        PostRecord {
            source: PathBuf::from(source),
            date: date.map(|d| d.to_string()),
            title: title.map(|t| t.to_string()),
            url: "/somewhere.html".to_string(),
            external_url: None,
        }
    }

    #[test]
    fn test_end_to_end() {
        let renderer = FeedRenderer::default();
        let posts = sample_posts();
        let lines: Vec<String> = renderer.render(&posts).collect();
        assert_eq!(lines, [
            "2017 September 01 - [Optimizing MySQL UUID-based IDs](/2017/09/01/optimized-uuid-with-hibernate.html)",
            "2013 April 23 - [Basic RESTful API versioning in Jersey](https://example.com/ext) (external)",
        ]);
    }

    #[test]
    fn test_date_prefix() {
        let renderer = FeedRenderer::default();
        let post = Post::new(date(2015, 6, 8), "Japan".to_string(), "/japan.html".to_string(), None);
        assert!(renderer.render_line(&post).starts_with("2015 June 08 - "));
    }

    #[test]
    fn test_order_and_count_preserved() {
        let renderer = FeedRenderer::default();
        // Deliberately not sorted by date
        let posts: Vec<Post> = [3, 1, 2, 1]
            .iter()
            .map(|n| Post::new(date(2010 + n, 1, 1), format!("post {}", n), format!("/post-{}.html", n), None))
            .collect();

        let lines: Vec<String> = renderer.render(&posts).collect();
        assert_eq!(lines.len(), posts.len());
        for (line, post) in lines.iter().zip(posts.iter()) {
            assert!(line.contains(&format!("[{}]({})", post.title(), post.url())));
        }
    }

    #[test]
    fn test_branches() {
        let renderer = FeedRenderer::default();
        for post in sample_posts() {
            let line = renderer.render_line(&post);
            assert!(line.contains(&format!("({})", post.target())));
            if post.is_external() {
                assert!(line.ends_with("(external)"));
                assert!(!line.contains(post.url()));
            } else {
                assert!(!line.contains("(external)"));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let renderer = FeedRenderer::default();
        let posts = sample_posts();
        let first: Vec<String> = renderer.render(&posts).collect();
        let second: Vec<String> = renderer.render(&posts).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty() {
        let renderer = FeedRenderer::default();
        assert_eq!(renderer.render(&[]).count(), 0);
        assert_eq!(renderer.render_records(Vec::<PostRecord>::new()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_html_format() {
        let renderer = FeedRenderer::new(LineFormat::Html);
        let posts = sample_posts();
        let lines: Vec<String> = renderer.render(&posts).collect();
        assert_eq!(lines, [
            r#"2017 September 01 - <a href="/2017/09/01/optimized-uuid-with-hibernate.html">Optimizing MySQL UUID-based IDs</a>"#,
            r#"2013 April 23 - <a href="https://example.com/ext" target="_blank" rel="noopener noreferrer">Basic RESTful API versioning in Jersey</a> (external)"#,
        ]);
    }

    #[test]
    fn test_escaping() {
        let post = Post::new(date(2014, 2, 3), "Java <3 [generics] & \"wildcards\"".to_string(), "/a.html?x=1&y=2".to_string(), None);

        let line = FeedRenderer::new(LineFormat::Markdown).render_line(&post);
        assert_eq!(line, r#"2014 February 03 - [Java <3 \[generics\] & "wildcards"](/a.html?x=1&y=2)"#);

        let line = FeedRenderer::new(LineFormat::Html).render_line(&post);
        assert_eq!(line, r#"2014 February 03 - <a href="/a.html?x=1&amp;y=2">Java &lt;3 [generics] &amp; &quot;wildcards&quot;</a>"#);
    }

    #[test]
    fn test_markdown_destination() {
        assert_eq!(markdown_destination("/2017/09/01/plain.html"), "/2017/09/01/plain.html");
        assert_eq!(markdown_destination("/my post.html"), "</my post.html>");
        assert_eq!(markdown_destination("https://en.wikipedia.org/wiki/Java_(programming_language)"),
                   "<https://en.wikipedia.org/wiki/Java_(programming_language)>");
        assert_eq!(markdown_destination("/a<b>.html"), r"</a\<b\>.html>");
    }

    #[test]
    fn test_markdown_target_with_space_and_paren() {
        let post = Post::new(date(2016, 5, 4), "Java".to_string(), "/java (draft).html".to_string(),
                             Some("https://en.wikipedia.org/wiki/Java_(programming_language)".to_string()));
        let line = FeedRenderer::default().render_line(&post);
        assert_eq!(line, "2016 May 04 - [Java](<https://en.wikipedia.org/wiki/Java_(programming_language)>) (external)");

        let post = Post::new(date(2016, 5, 4), "Java".to_string(), "/java (draft).html".to_string(), None);
        let line = FeedRenderer::default().render_line(&post);
        assert_eq!(line, "2016 May 04 - [Java](</java (draft).html>)");
    }

    #[test]
    fn test_render_records() {
        let renderer = FeedRenderer::default();
        let lines = renderer.render_records(vec![
            record("_posts/2015-06-08-a.md", Some("2015-06-08"), Some("A")),
            record("_posts/2014-01-01-b.md", Some("2014-01-01"), Some("B")),
        ]).unwrap();
        assert_eq!(lines, [
            "2015 June 08 - [A](/somewhere.html)",
            "2014 January 01 - [B](/somewhere.html)",
        ]);
    }

    #[test]
    fn test_render_records_fails_fast() {
        let renderer = FeedRenderer::default();

        let err = renderer.render_records(vec![
            record("_posts/2015-06-08-a.md", Some("2015-06-08"), Some("A")),
            record("_drafts/undated.md", None, Some("Undated")),
            record("_posts/2014-01-01-untitled.md", Some("2014-01-01"), None),
        ]).unwrap_err();
        assert!(matches!(err, FeedError::MissingDate { .. }));
        assert_eq!(err.file(), &PathBuf::from("_drafts/undated.md"));

        let err = renderer.render_records(vec![
            record("_posts/2014-01-01-untitled.md", Some("2014-01-01"), Some("")),
        ]).unwrap_err();
        assert!(matches!(err, FeedError::MissingTitle { .. }));
    }
}
