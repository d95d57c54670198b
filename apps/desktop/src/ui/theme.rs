/// ANSI styling derived from the applied display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Palette = Palette {
        heading: "",
        accent: "",
        muted: "",
        error: "",
        reset: "",
    };

    const LIGHT: Palette = Palette {
        heading: "\x1b[1;30m",
        accent: "\x1b[34m",
        muted: "\x1b[90m",
        error: "\x1b[31m",
        reset: "\x1b[0m",
    };

    const DARK: Palette = Palette {
        heading: "\x1b[1;97m",
        accent: "\x1b[96m",
        muted: "\x1b[37m",
        error: "\x1b[91m",
        reset: "\x1b[0m",
    };

    pub fn for_view(dark: bool, color: bool) -> Self {
        match (color, dark) {
            (false, _) => Self::PLAIN,
            (true, true) => Self::DARK,
            (true, false) => Self::LIGHT,
        }
    }

    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_string()
        } else {
            format!("{style}{text}{}", self.reset)
        }
    }
}
