//! Markdown/MDX rendering with syntax highlighting

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

lazy_static! {
    /// MDX module statement, which has no HTML output
    static ref MDX_STATEMENT: Regex = Regex::new(r"^(?:import|export)\s").unwrap();
}

/// Compiles article bodies to HTML
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Option<Theme>,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom highlighting settings
    pub fn with_options(highlight: &HighlightConfig) -> Self {
        let theme = if highlight.enable {
            let mut themes = ThemeSet::load_defaults().themes;
            themes.remove(&highlight.theme).or_else(|| {
                tracing::warn!(
                    "Unknown highlight theme {:?}, using the first bundled theme",
                    highlight.theme
                );
                themes.into_values().next()
            })
        } else {
            None
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            line_numbers: highlight.line_number,
        }
    }

    /// Render an article body to HTML
    pub fn render(&self, body: &str) -> Result<String> {
        let markdown = strip_mdx_statements(body);

        // Front-matter is split off before rendering, so YAML metadata
        // blocks stay disabled here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref())?;
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                event if code_block.is_none() => events.push(event),
                _ => {}
            }
        }

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> Result<String> {
        let lang = lang.unwrap_or("text");
        let class = html_escape(lang);

        let Some(theme) = &self.theme else {
            return Ok(format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                class,
                html_escape(code)
            ));
        };

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = highlighted_html_for_string(code, &self.syntax_set, syntax, theme)
            .map_err(|e| anyhow!("Failed to highlight {} code block: {}", lang, e))?;

        if self.line_numbers {
            Ok(with_line_numbers(&highlighted, &class, code.lines().count()))
        } else {
            Ok(format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                class, highlighted
            ))
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop the leading block of single-line MDX `import`/`export` statements.
/// Statements further down are left alone so code samples keep their imports.
fn strip_mdx_statements(body: &str) -> &str {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() && !MDX_STATEMENT.is_match(line) {
            break;
        }
        offset += line.len();
    }
    &body[offset..]
}

/// Wrap highlighted code in a table with a line-number gutter
fn with_line_numbers(highlighted: &str, class: &str, line_count: usize) -> String {
    let gutter = (1..=line_count)
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        class, gutter, highlighted
    )
}

/// Simple HTML escaping
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
