use std::fmt;

/// Addressable views. Paths are id-based; nothing else is encoded in the URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Route {
    /// `/`
    Landing,
    /// `/protocols`
    List,
    /// `/protocols/<id>` (also reachable as `/protocol/<id>`).
    Detail(String),
    /// Any other path, kept verbatim.
    NotFound(String),
}

impl Route {
    /// Parse a request path. Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Landing,
            ["protocols"] => Self::List,
            ["protocols" | "protocol", id] => Self::Detail((*id).to_string()),
            _ => Self::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::List => "/protocols".to_string(),
            Self::Detail(id) => format!("/protocols/{id}"),
            Self::NotFound(p) => p.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/route.rs"]
mod tests;
