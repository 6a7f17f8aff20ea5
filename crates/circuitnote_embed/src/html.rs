//! HTML emission for resolved embeds.
//!
//! Element shapes (classes, attributes, sizes) match what the simulator
//! integration has always produced, so existing stylesheets keep working.

use crate::resolver::{ResolvedEmbed, ViewMode};

/// Storage partition for isolated views; persistent so simulator-side
/// preferences survive reloads.
const WEBVIEW_PARTITION: &str = "persist:circuitjs";

/// Renders the full container for one embed: optional edit link, optional
/// offline notice, then the main view element.
pub fn render_embed(embed: &ResolvedEmbed) -> String {
    let mut out = String::from("<div class=\"circuitjs-container\">\n");

    if let Some(edit_url) = &embed.edit_url {
        out.push_str(&edit_link(edit_url));
    }
    if let Some(notice) = &embed.offline_notice {
        out.push_str(&offline_notice(notice));
    }

    match embed.mode {
        ViewMode::IsolatedView => out.push_str(&webview(&embed.main_url)),
        ViewMode::Frame => out.push_str(&iframe(&embed.main_url)),
    }

    out.push_str("</div>\n");
    out
}

fn edit_link(url: &str) -> String {
    format!(
        "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" \
         class=\"circuitjs-edit-link\">[EDIT]</a>\n",
        url = escape_attr(url)
    )
}

fn offline_notice(text: &str) -> String {
    format!(
        "<div class=\"circuitjs-notice\">{}</div>\n",
        escape_text(text)
    )
}

fn webview(url: &str) -> String {
    format!(
        "<webview src=\"{url}\" allowpopups partition=\"{WEBVIEW_PARTITION}\" \
         class=\"circuitjs-webview\"></webview>\n",
        url = escape_attr(url)
    )
}

fn iframe(url: &str) -> String {
    format!(
        "<iframe src=\"{url}\" width=\"100%\" height=\"600px\" \
         class=\"circuitjs-iframe\"></iframe>\n",
        url = escape_attr(url)
    )
}

pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
