/// Applies terminal styles to stdout. A disabled stylus ignores every call,
/// so callers never branch on color support themselves.
pub struct Stylus {
    enabled: bool,
}

impl Stylus {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn set(&self, style: &Style) {
        if !self.enabled {
            return;
        }
        self.clear();
        if let Some(mut term) = term::stdout() {
            if let Some(color) = style.color {
                let _ = term.fg(color);
            }
            if let Some(attr) = style.attr {
                let _ = term.attr(attr);
            }
        }
    }

    pub fn clear(&self) {
        if !self.enabled {
            return;
        }
        if let Some(mut term) = term::stdout() {
            let _ = term.reset();
        }
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Clone)]
pub struct Style {
    color: Option<term::color::Color>,
    attr: Option<term::Attr>,
}

impl Style {
    pub fn new() -> Self {
        Self {
            color: None,
            attr: None,
        }
    }

    pub fn foreground(self, color: term::color::Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn attribute(self, attr: term::Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}
