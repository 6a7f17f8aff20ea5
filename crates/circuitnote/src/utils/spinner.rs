use std::borrow::Cow;

use spinoff::{Color, Spinner as Spinoff, spinners};

/// Thin wrapper over spinoff so call sites stay terse.
pub(crate) struct Spinner(Spinoff);

impl Spinner {
    pub(crate) fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        Self(Spinoff::new(spinners::Dots, msg, Color::Cyan))
    }

    pub(crate) fn update_text(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.0.update_text(msg);
    }

    pub(crate) fn stop_success(&mut self, msg: &str) {
        self.0.success(msg);
    }

    pub(crate) fn stop_error(&mut self, msg: impl AsRef<str>) {
        self.0.fail(msg.as_ref());
    }
}
