use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

// Initialize syntax highlighting resources once
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(|| SyntaxSet::load_defaults_newlines());
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(|| ThemeSet::load_defaults());

const CODE_THEME: &str = "base16-ocean.dark";

/// Converts raw markdown text into an HTML fragment.
///
/// Tables, strikethrough and task lists are enabled on top of the
/// CommonMark baseline. The fragment carries no document shell; wrapping
/// it in a page is the layout renderer's job.
pub fn convert(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, highlight_fenced_blocks(parser).into_iter());
    out
}

// Fenced code blocks with a language token get replaced by a single
// pre-rendered HTML event. Everything else passes through untouched.
fn highlight_fenced_blocks<'a>(mut parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();

    while let Some(event) = parser.next() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) if !lang.is_empty() => {
                let mut code = String::new();
                for inner in parser.by_ref() {
                    match inner {
                        Event::End(TagEnd::CodeBlock) => break,
                        Event::Text(text) => code.push_str(&text),
                        _ => {}
                    }
                }
                events.push(Event::Html(highlight(&lang, &code).into()));
            }
            other => events.push(other),
        }
    }

    events
}

fn highlight(lang: &str, code: &str) -> String {
    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(lang) else {
        return plain_code_block(code);
    };

    let theme = &THEME_SET.themes[CODE_THEME];
    highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme)
        .unwrap_or_else(|_| plain_code_block(code))
}

fn plain_code_block(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", html_escape::encode_text(code))
}
