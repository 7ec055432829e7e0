//! Markdown rendering for the help and policy pages
//!
//! Uses pulldown-cmark to turn the bundled documents into styled HTML.
//! Headings carry slug ids so the pages can link to sections, and raw HTML
//! in the source is escaped rather than passed through.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: &'static str,
) -> impl IntoView {
    let html = render_markdown(content);

    view! {
        <div class="doc-content max-w-none text-slate-700 dark:text-slate-300 leading-relaxed" inner_html=html />
    }
}

/// A second-level heading, used to build a page outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
}

/// Lowercase, ASCII alphanumerics joined by single dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// `##` headings of a document in order
pub fn outline(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => current = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(title) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if let Some(title) = current.take() {
                    sections.push(Section {
                        id: slugify(&title),
                        title,
                    });
                }
            }
            _ => {}
        }
    }
    sections
}

/// Output sink that diverts heading content until the heading closes
#[derive(Default)]
struct HtmlWriter {
    out: String,
    heading: Option<PendingHeading>,
}

struct PendingHeading {
    level: HeadingLevel,
    html: String,
    text: String,
}

impl HtmlWriter {
    fn push(&mut self, s: &str) {
        match self.heading.as_mut() {
            Some(heading) => heading.html.push_str(s),
            None => self.out.push_str(s),
        }
    }

    fn push_text(&mut self, s: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(s);
        }
        self.push(&escape_html(s));
    }

    fn close_heading(&mut self) {
        if let Some(heading) = self.heading.take() {
            let (tag, class) = heading_style(heading.level);
            self.out.push_str(&format!(
                "<{tag} id=\"{}\" class=\"{class}\">{}</{tag}>",
                slugify(&heading.text),
                heading.html,
            ));
        }
    }
}

fn heading_style(level: HeadingLevel) -> (&'static str, &'static str) {
    match level {
        HeadingLevel::H1 => ("h1", "text-3xl font-extrabold text-slate-900 dark:text-white mb-4"),
        HeadingLevel::H2 => ("h2", "text-2xl font-bold text-slate-900 dark:text-white mt-10 mb-3 scroll-mt-24"),
        HeadingLevel::H3 => ("h3", "text-lg font-bold text-slate-900 dark:text-white mt-6 mb-2"),
        HeadingLevel::H4 => ("h4", "text-base font-semibold mt-4 mb-1"),
        HeadingLevel::H5 => ("h5", "text-sm font-semibold mt-3 mb-1"),
        HeadingLevel::H6 => ("h6", "text-xs font-semibold uppercase mt-3 mb-1"),
    }
}

/// Parse markdown string to HTML
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut w = HtmlWriter::default();
    let mut in_code_block = false;
    let mut code_block_content = String::new();
    let mut in_table_head = false;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => w.push("<p class=\"mb-4\">"),
                Tag::Heading { level, .. } => {
                    w.heading = Some(PendingHeading {
                        level,
                        html: String::new(),
                        text: String::new(),
                    });
                }
                Tag::BlockQuote(_) => w.push(
                    "<blockquote class=\"border-l-4 border-blue-500 bg-blue-50 dark:bg-blue-900/20 rounded-r-xl px-4 py-3 my-4\">",
                ),
                Tag::CodeBlock(_) => {
                    in_code_block = true;
                    code_block_content.clear();
                }
                Tag::List(Some(_)) => w.push("<ol class=\"list-decimal pl-6 mb-4 space-y-1.5\">"),
                Tag::List(None) => w.push("<ul class=\"list-disc pl-6 mb-4 space-y-1.5\">"),
                Tag::Item => w.push("<li>"),
                Tag::Emphasis => w.push("<em>"),
                Tag::Strong => w.push("<strong class=\"font-bold text-slate-900 dark:text-white\">"),
                Tag::Strikethrough => w.push("<del>"),
                Tag::Link { dest_url, .. } => {
                    let target = if dest_url.starts_with('/') || dest_url.starts_with('#') {
                        ""
                    } else {
                        " target=\"_blank\" rel=\"noopener noreferrer\""
                    };
                    w.push(&format!(
                        "<a href=\"{}\" class=\"font-semibold text-blue-600 hover:underline\"{}>",
                        escape_html(&dest_url),
                        target
                    ));
                }
                Tag::Table(_) => w.push(
                    "<div class=\"overflow-x-auto my-4\"><table class=\"min-w-full text-sm border border-slate-200 dark:border-slate-700\">",
                ),
                Tag::TableHead => {
                    in_table_head = true;
                    w.push("<thead class=\"bg-slate-100 dark:bg-slate-800\"><tr>");
                }
                Tag::TableRow => w.push("<tr>"),
                Tag::TableCell if in_table_head => {
                    w.push("<th class=\"px-3 py-2 text-left font-bold\">");
                }
                Tag::TableCell => {
                    w.push("<td class=\"px-3 py-2 border-t border-slate-200 dark:border-slate-700\">");
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => w.push("</p>"),
                TagEnd::Heading(_) => w.close_heading(),
                TagEnd::BlockQuote(_) => w.push("</blockquote>"),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    w.push(&format!(
                        "<pre class=\"bg-slate-900 text-slate-100 rounded-xl p-4 my-4 overflow-x-auto\"><code class=\"text-sm font-mono\">{}</code></pre>",
                        escape_html(&code_block_content)
                    ));
                }
                TagEnd::List(true) => w.push("</ol>"),
                TagEnd::List(false) => w.push("</ul>"),
                TagEnd::Item => w.push("</li>"),
                TagEnd::Emphasis => w.push("</em>"),
                TagEnd::Strong => w.push("</strong>"),
                TagEnd::Strikethrough => w.push("</del>"),
                TagEnd::Link => w.push("</a>"),
                TagEnd::Table => w.push("</tbody></table></div>"),
                TagEnd::TableHead => {
                    in_table_head = false;
                    w.push("</tr></thead><tbody>");
                }
                TagEnd::TableRow => w.push("</tr>"),
                TagEnd::TableCell if in_table_head => w.push("</th>"),
                TagEnd::TableCell => w.push("</td>"),
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    code_block_content.push_str(&text);
                } else {
                    w.push_text(&text);
                }
            }
            Event::Code(code) => {
                if let Some(heading) = w.heading.as_mut() {
                    heading.text.push_str(&code);
                }
                w.push(&format!(
                    "<code class=\"bg-slate-100 dark:bg-slate-800 px-1.5 py-0.5 rounded text-sm font-mono\">{}</code>",
                    escape_html(&code)
                ));
            }
            Event::Html(html) | Event::InlineHtml(html) => w.push(&escape_html(&html)),
            Event::SoftBreak => w.push(" "),
            Event::HardBreak => w.push("<br />"),
            Event::Rule => w.push("<hr class=\"my-8 border-slate-200 dark:border-slate-700\" />"),
            _ => {}
        }
    }

    w.out
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        let html = render_markdown("Hello, world!");
        assert!(html.contains("<p"));
        assert!(html.contains("Hello, world!"));
        assert!(html.contains("</p>"));
    }

    #[test]
    fn test_heading_gets_slug_id() {
        let html = render_markdown("## Fees & Scholarships");
        assert!(html.contains("<h2 id=\"fees-scholarships\""));
        assert!(html.contains("Fees &amp; Scholarships</h2>"));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let html = render_markdown("### Using `live` rooms");
        assert!(html.contains("id=\"using-live-rooms\""));
        assert!(html.contains("<code"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("How do I apply?"), "how-do-i-apply");
        assert_eq!(slugify("  Step 1: Register  "), "step-1-register");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_outline_lists_second_level_headings() {
        let doc = "# Title\n\n## Eligibility\n\ntext\n\n### Detail\n\n## Important Dates\n";
        let sections = outline(doc);
        assert_eq!(
            sections,
            vec![
                Section {
                    id: "eligibility".to_string(),
                    title: "Eligibility".to_string()
                },
                Section {
                    id: "important-dates".to_string(),
                    title: "Important Dates".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_links_open_external_in_new_tab() {
        let html = render_markdown("[Directory](/colleges) and [Site](https://example.com)");
        assert!(html.contains("href=\"/colleges\" class=\"font-semibold text-blue-600 hover:underline\">"));
        assert!(html.contains("href=\"https://example.com\" class=\"font-semibold text-blue-600 hover:underline\" target=\"_blank\""));
    }

    #[test]
    fn test_lists() {
        let html = render_markdown("- Item 1\n- Item 2");
        assert!(html.contains("<ul"));
        assert!(html.contains("<li>Item 1</li>"));

        let html = render_markdown("1. First\n2. Second");
        assert!(html.contains("<ol"));
        assert!(html.contains("First"));
    }

    #[test]
    fn test_table_header_cells() {
        let html = render_markdown("| Stage | Date |\n|---|---|\n| Apply | June |");
        assert!(html.contains("<th"));
        assert!(html.contains("<td"));
        assert!(html.contains("Apply"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert('xss')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
