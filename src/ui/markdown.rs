//! Markdown rendering for legal documents and deck copy
//!
//! Uses pulldown-cmark to parse Markdown and renders it as HTML elements.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render a Markdown document as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: &'static str,
    #[prop(default = "markdown-content")]
    class: &'static str,
) -> impl IntoView {
    let html = parse_markdown(content);

    view! { <div class=class inner_html=html /> }
}

/// Render a single line of inline Markdown (`**bold**`, `*em*`) inside a span
#[component]
pub fn InlineMarkdown(
    text: &'static str,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! { <span class=class inner_html=parse_inline(text) /> }
}

/// Parse markdown string to HTML
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html_output.push_str("<p class=\"mt-4\">"),
                Tag::Heading { level, .. } => {
                    let (class, tag) = match level {
                        HeadingLevel::H1 => ("font-heading text-2xl text-white", "h1"),
                        HeadingLevel::H2 => ("font-heading text-xl text-white mt-6", "h2"),
                        _ => ("font-heading text-lg text-white mt-4", "h3"),
                    };
                    html_output.push_str(&format!("<{} class=\"{}\">", tag, class));
                }
                Tag::List(Some(_)) => {
                    html_output.push_str("<ol class=\"list-decimal ml-6 mt-2 space-y-1\">");
                }
                Tag::List(None) => {
                    html_output.push_str("<ul class=\"list-disc ml-6 mt-2 space-y-1\">");
                }
                Tag::Item => html_output.push_str("<li>"),
                Tag::Emphasis => html_output.push_str("<em>"),
                Tag::Strong => html_output.push_str("<strong class=\"font-semibold\">"),
                Tag::Strikethrough => html_output.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    // site-relative links stay in the tab
                    let target = if dest_url.starts_with('/') || dest_url.starts_with('#') {
                        ""
                    } else {
                        " target=\"_blank\" rel=\"noopener noreferrer\""
                    };
                    html_output.push_str(&format!(
                        "<a href=\"{}\" class=\"underline hover:text-white\"{}>",
                        escape_html(&dest_url),
                        target
                    ));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html_output.push_str("</p>"),
                TagEnd::Heading(level) => {
                    let tag = match level {
                        HeadingLevel::H1 => "h1",
                        HeadingLevel::H2 => "h2",
                        _ => "h3",
                    };
                    html_output.push_str(&format!("</{}>", tag));
                }
                TagEnd::List(true) => html_output.push_str("</ol>"),
                TagEnd::List(false) => html_output.push_str("</ul>"),
                TagEnd::Item => html_output.push_str("</li>"),
                TagEnd::Emphasis => html_output.push_str("</em>"),
                TagEnd::Strong => html_output.push_str("</strong>"),
                TagEnd::Strikethrough => html_output.push_str("</del>"),
                TagEnd::Link => html_output.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) | Event::Code(text) => html_output.push_str(&escape_html(&text)),
            Event::SoftBreak => html_output.push(' '),
            Event::HardBreak => html_output.push_str("<br />"),
            Event::Rule => html_output.push_str("<hr class=\"my-6 border-zinc-800\" />"),
            // raw HTML is never trusted
            Event::Html(html) | Event::InlineHtml(html) => {
                html_output.push_str(&escape_html(&html));
            }
            _ => {}
        }
    }

    html_output
}

/// Parse one line of inline Markdown, without the wrapping paragraph
pub fn parse_inline(text: &str) -> String {
    let html = parse_markdown(text);
    html.strip_prefix("<p class=\"mt-4\">")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .map(str::to_string)
        .unwrap_or(html)
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
    use crate::core::content::{PRIVACY, TERMS};

    #[test]
    fn test_basic_paragraph() {
        let html = parse_markdown("Hello, world!");
        assert!(html.contains("<p"));
        assert!(html.contains("Hello, world!"));
        assert!(html.contains("</p>"));
    }

    #[test]
    fn test_heading_and_list() {
        let html = parse_markdown("## 1. Using Nodal\n\n- You must be 13+ to use Nodal.\n- Be nice.");
        assert!(html.contains("<h2"));
        assert!(html.contains("1. Using Nodal</h2>"));
        assert!(html.contains("<ul"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_links() {
        let internal = parse_markdown("[Privacy Policy](/privacy)");
        assert!(internal.contains("href=\"/privacy\""));
        assert!(!internal.contains("_blank"));

        let external = parse_markdown("[Nodal](https://app.nodalapp.com/)");
        assert!(external.contains("target=\"_blank\""));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert('xss')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_parse_inline_strips_paragraph() {
        assert_eq!(
            parse_inline("Docs are **linear**"),
            "Docs are <strong class=\"font-semibold\">linear</strong>"
        );
        assert_eq!(parse_inline("plain text"), "plain text");
    }

    #[test]
    fn test_legal_documents_render() {
        for doc in [TERMS, PRIVACY] {
            let html = parse_markdown(doc.body);
            assert_eq!(html.matches("<h2").count(), 6, "{}", doc.title);
            assert!(html.contains("<ul"));
            assert!(!html.contains("##"));
        }
    }
}
