use circuitnote_assets::AssetManager;
use circuitnote_config::Settings;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::html::{escape_text, render_embed};
use crate::resolver::CircuitEmbed;

/// Renders a Markdown document to an HTML fragment, replacing fenced code
/// blocks whose tag matches the configured circuit tag with live embeds.
/// Everything else renders as ordinary Markdown.
pub fn render_document(markdown: &str, settings: &Settings, assets: &AssetManager) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);

    let mut events: Vec<Event> = Vec::new();
    // body of the circuit block currently being collected, if any
    let mut circuit: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info)))
                if fence_tag(info) == settings.circuit_tag =>
            {
                circuit = Some(String::new());
            }
            Event::Text(ref text) if circuit.is_some() => {
                if let Some(buf) = circuit.as_mut() {
                    buf.push_str(text);
                }
            }
            Event::End(TagEnd::CodeBlock) if circuit.is_some() => {
                let source = circuit.take().unwrap_or_default();
                let embed = CircuitEmbed::new(source);
                let resolved = embed.resolve(settings, assets);
                events.push(Event::Html(render_embed(&resolved).into()));
            }
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Wraps a rendered fragment into a minimal standalone page carrying the
/// container styles.
pub fn render_page(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{PAGE_CSS}</style>\n</head>\n\
         <body>\n{fragment}</body>\n</html>\n",
        title = escape_text(title),
    )
}

const PAGE_CSS: &str = "\
.circuitjs-container { margin: 1em 0; }
.circuitjs-edit-link { display: inline-block; margin-bottom: 0.25em; font-size: 0.8em; }
.circuitjs-notice { padding: 0.5em; margin-bottom: 0.5em; border: 1px solid #c9a23c; border-radius: 4px; }
.circuitjs-iframe, .circuitjs-webview { border: none; width: 100%; height: 600px; }
";

/// The language part of a fence info string (`rust,no_run` -> `rust`).
fn fence_tag(info: &str) -> &str {
    info.split([',', ' ']).next().unwrap_or(info).trim()
}
