use crate::foundation::core::Rgba8;

/// Dark/light flag supplied to every themed component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

impl Theme {
    pub const DARK: Theme = Theme { dark: true };
    pub const LIGHT: Theme = Theme { dark: false };

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn name(self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }

    pub fn palette(self) -> Palette {
        Palette::for_theme(self)
    }
}

/// Colors the frame renderer needs from the theme.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub background: Rgba8,
    pub grid: Rgba8,
    pub text: Rgba8,
    pub muted: Rgba8,
    pub link: Rgba8,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.dark {
            Self {
                background: Rgba8::INK,
                grid: Rgba8::rgba(0x00, 0xf0, 0xff, 0x14),
                text: Rgba8::WHITE,
                muted: Rgba8::rgb(0x88, 0x88, 0x88),
                link: Rgba8::rgba(0xff, 0xff, 0xff, 0x4d),
            }
        } else {
            Self {
                background: Rgba8::rgb(0xf4, 0xf6, 0xfb),
                grid: Rgba8::rgba(0x0a, 0x0e, 0x27, 0x14),
                text: Rgba8::INK,
                muted: Rgba8::rgb(0x5a, 0x60, 0x78),
                link: Rgba8::rgba(0x0a, 0x0e, 0x27, 0x4d),
            }
        }
    }
}

/// Application shell: the single owner of the theme toggle.
#[derive(Debug, Default)]
pub struct Shell {
    theme: Theme,
}

impl Shell {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.name(), "theme toggled");
        self.theme
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decor/theme.rs"]
mod tests;
