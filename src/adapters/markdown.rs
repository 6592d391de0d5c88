//! CommonMark renderer
//!
//! Implements `MarkdownRenderer` with `pulldown-cmark`. Raw HTML in the
//! source is escaped rather than passed through, and `#<number>` references
//! in plain text become links into the owning project.

use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, html};
use regex::Regex;

use crate::config::MarkdownSettings;
use crate::core::models::ProjectRef;
use crate::core::ports::MarkdownRenderer;

static PROJECT_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w&/#])#(\d+)\b").expect("static pattern"));

/// Markdown renderer backed by `pulldown-cmark`
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
    base_url: String,
}

impl CommonMarkRenderer {
    /// Create a renderer from settings
    #[must_use]
    pub fn new(settings: &MarkdownSettings) -> Self {
        let mut options = Options::empty();
        if settings.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if settings.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if settings.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        Self {
            options,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn ref_url(&self, project: &ProjectRef, reference: &str) -> String {
        format!("{}/project/{}/ref/{reference}", self.base_url, project.slug)
    }

    /// Split a text run into plain text and reference links
    fn link_refs<'a>(&self, project: &ProjectRef, text: &str, out: &mut Vec<Event<'a>>) {
        let mut last = 0;
        for caps in PROJECT_REF.captures_iter(text) {
            let (Some(prefix), Some(number)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let start = prefix.end();
            if start > last {
                out.push(Event::Text(CowStr::from(text[last..start].to_string())));
            }
            let label = format!("#{}", number.as_str());
            out.push(Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url: CowStr::from(self.ref_url(project, number.as_str())),
                title: CowStr::from(label.clone()),
                id: CowStr::Borrowed(""),
            }));
            out.push(Event::Text(CowStr::from(label)));
            out.push(Event::End(TagEnd::Link));
            last = number.end();
        }
        if last < text.len() {
            out.push(Event::Text(CowStr::from(text[last..].to_string())));
        }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new(&MarkdownSettings::default())
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, project: &ProjectRef, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let mut events = Vec::new();
        let mut in_code_block = false;
        let mut link_depth = 0usize;

        for event in Parser::new_ext(text, self.options) {
            match event {
                Event::Start(Tag::CodeBlock(_)) => {
                    in_code_block = true;
                    events.push(event);
                },
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    events.push(event);
                },
                Event::Start(Tag::Link { .. }) => {
                    link_depth += 1;
                    events.push(event);
                },
                Event::End(TagEnd::Link) => {
                    link_depth = link_depth.saturating_sub(1);
                    events.push(event);
                },
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Text(t) if !in_code_block && link_depth == 0 => {
                    self.link_refs(project, &t, &mut events);
                },
                other => events.push(other),
            }
        }

        let mut output = String::new();
        html::push_html(&mut output, events.into_iter());
        output
    }
}
