//! Views and routing.
//!
//! [`resolve`] turns a [`Route`] into the [`View`] to present. Views are plain data; a host
//! application decides how to draw cards and chrome, while the protocol canvas itself comes
//! from [`VisualizationPage`].

pub mod route;
pub mod visualization;

pub use route::Route;
pub use visualization::{Notice, NoticeLevel, Panel, PanelStep, VisualizationPage};

use crate::{
    decor::{
        backdrop::{Backdrop, BackdropVariant},
        theme::Theme,
    },
    protocols::{Category, Difficulty, ProtocolDefinition, Registry},
};

/// Static copy for the landing view.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Landing {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub features: [Feature; 3],
    pub call_to_action: &'static str,
    /// Where the call to action leads.
    pub target: Route,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

impl Landing {
    pub fn new() -> Self {
        Self {
            headline: "Network Protocols Come to Life",
            tagline: "Interactive visualizations that make computer networking concepts \
                      crystal clear through stunning animations and step-by-step explanations.",
            features: [
                Feature {
                    title: "Visual Learning",
                    text: "See data packets flow in real time with animated diagrams.",
                },
                Feature {
                    title: "Step by Step",
                    text: "Play, pause and step through every stage of a protocol exchange.",
                },
                Feature {
                    title: "Full Stack",
                    text: "From the data link layer up to application protocols.",
                },
            ],
            call_to_action: "Explore Protocols",
            target: Route::List,
        }
    }
}

impl Default for Landing {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry in the protocol library.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProtocolCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub step_count: usize,
    pub target: Route,
}

impl<'a> ProtocolCard<'a> {
    pub fn for_protocol(def: &'a ProtocolDefinition) -> Self {
        Self {
            id: &def.id,
            name: &def.name,
            description: &def.description,
            category: def.category,
            difficulty: def.difficulty,
            step_count: def.steps.len(),
            target: Route::Detail(def.id.clone()),
        }
    }
}

/// Everything a route can resolve to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View<'a> {
    Landing {
        content: Landing,
        backdrop: Backdrop,
    },
    List {
        title: &'static str,
        blurb: &'static str,
        cards: Vec<ProtocolCard<'a>>,
        filter: Option<Category>,
        backdrop: Backdrop,
    },
    Detail {
        protocol: &'a ProtocolDefinition,
        backdrop: Backdrop,
    },
    NotFound {
        requested: String,
        title: &'static str,
        back_label: &'static str,
        back: Route,
    },
}

impl View<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Resolve `route` against `registry`. Unknown ids and paths become [`View::NotFound`].
#[tracing::instrument(skip(registry))]
pub fn resolve<'a>(route: &Route, registry: &'a Registry, theme: Theme) -> View<'a> {
    match route {
        Route::Landing => View::Landing {
            content: Landing::new(),
            backdrop: Backdrop::select(theme, BackdropVariant::Home),
        },
        Route::List => list_view(registry, None, theme),
        Route::Detail(id) => match registry.get(id) {
            Some(def) => View::Detail {
                protocol: def,
                backdrop: Backdrop::select(theme, BackdropVariant::Protocols),
            },
            None => {
                tracing::debug!(requested = %id, "unknown protocol requested");
                not_found(id.clone(), Route::List)
            }
        },
        Route::NotFound(path) => not_found(path.clone(), Route::Landing),
    }
}

/// The protocol library, optionally restricted to one category. Registry order is kept.
pub fn list_view(registry: &Registry, filter: Option<Category>, theme: Theme) -> View<'_> {
    let cards = registry
        .iter()
        .filter(|def| filter.is_none_or(|c| def.category == c))
        .map(ProtocolCard::for_protocol)
        .collect();
    View::List {
        title: "Protocol Library",
        blurb: "Explore interactive visualizations of network protocols. Each protocol comes \
                with step-by-step animations and detailed explanations.",
        cards,
        filter,
        backdrop: Backdrop::select(theme, BackdropVariant::Protocols),
    }
}

fn not_found(requested: String, back: Route) -> View<'static> {
    let (title, back_label) = match back {
        Route::List => ("Protocol Not Found", "Back to Protocols"),
        _ => ("Page Not Found", "Back to Home"),
    };
    View::NotFound {
        requested,
        title,
        back_label,
        back,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/mod.rs"]
mod tests;
