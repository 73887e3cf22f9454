use crate::decor::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackdropVariant {
    /// Landing page.
    Home,
    /// Protocol list and detail pages.
    Protocols,
}

/// Background image choice for a view.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Backdrop {
    /// Asset path under the static image directory.
    pub image: &'static str,
    /// CSS-style brightness multiplier applied to the image.
    pub brightness: f64,
}

impl Backdrop {
    pub fn select(theme: Theme, variant: BackdropVariant) -> Self {
        let image = match (variant, theme.dark) {
            (BackdropVariant::Home, true) => "images/kingdom-background.png",
            (BackdropVariant::Home, false) => "images/space-background-light.webp",
            (BackdropVariant::Protocols, true) => "images/labyrinth-background.png",
            (BackdropVariant::Protocols, false) => "images/plains-background.png",
        };
        Self {
            image,
            brightness: if theme.dark { 0.7 } else { 0.9 },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decor/backdrop.rs"]
mod tests;
