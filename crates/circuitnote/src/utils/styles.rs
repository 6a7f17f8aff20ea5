use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;

use crate::utils::{CHECK, MARK};

pub fn get_styles() -> Styles {
    let heading = Style::new()
        .bold()
        .underline()
        .fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
    let emphasis = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Red)));

    Styles::styled()
        .usage(heading)
        .header(heading)
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(emphasis)
        .error(emphasis)
        .valid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}

fn colored(msg: &str, color: AnsiColor) -> String {
    let style = Style::new().fg_color(Some(Color::Ansi(color)));
    format!("{style}{msg}{style:#}")
}

pub(crate) fn fmt_green(msg: &str) -> String {
    colored(msg, AnsiColor::Green)
}

pub(crate) fn fmt_cyan(msg: &str) -> String {
    colored(msg, AnsiColor::BrightCyan)
}

pub(crate) fn fmt_red(msg: &str) -> String {
    colored(msg, AnsiColor::Red)
}

pub(crate) fn fmt_yellow(msg: &str) -> String {
    colored(msg, AnsiColor::Yellow)
}

pub(crate) fn fmt_bold(msg: &str) -> String {
    let bold = Style::new().bold();
    format!("{bold}{msg}{bold:#}")
}

pub(crate) fn fmt_dimmed(msg: &str) -> String {
    let dimmed = Style::new().dimmed();
    format!("{dimmed}{msg}{dimmed:#}")
}

pub(crate) fn fmt_success(msg: &str) -> String {
    format!("{} {msg}", fmt_green(CHECK))
}

pub(crate) fn fmt_error(msg: &str) -> String {
    format!("{} {msg}", fmt_red(MARK))
}
