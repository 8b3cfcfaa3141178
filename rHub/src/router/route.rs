//! Route definitions and path matching.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{Error, Result};

/// One entry of the route table.
#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern, with `:name` placeholders for single segments.
    pub path: String,
    /// Route name.
    pub name: String,
    /// Whether entering the route needs a signed-in session.
    pub requires_auth: bool,
    /// Path this route forwards to before any guard runs.
    pub redirect: Option<String>,
    pattern: Regex,
    params: Vec<String>,
}

impl Route {
    /// Create a public route.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let (pattern, params) = compile(&path)?;
        Ok(Self {
            path,
            name: name.into(),
            requires_auth: false,
            redirect: None,
            pattern,
            params,
        })
    }

    /// Mark the route as needing authentication.
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Forward the route to another path.
    pub fn redirect_to(mut self, to: impl Into<String>) -> Self {
        self.redirect = Some(to.into());
        self
    }

    /// Match a concrete path, returning its named params.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let caps = self.pattern.captures(path)?;
        Some(
            self.params
                .iter()
                .filter_map(|name| caps.name(name).map(|m| (name.clone(), m.as_str().to_owned())))
                .collect(),
        )
    }
}

/// Turn `/shop/:id` into `^/shop/(?P<id>[^/]+)/?$`.
fn compile(path: &str) -> Result<(Regex, Vec<String>)> {
    if !path.starts_with('/') {
        return Err(Error::InvalidArgument(format!(
            "route path '{}' must start with '/'",
            path
        )));
    }

    let mut source = String::from("^");
    let mut params = Vec::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        source.push('/');
        match segment.strip_prefix(':') {
            Some(name) if !name.is_empty() => {
                source.push_str(&format!("(?P<{}>[^/]+)", name));
                params.push(name.to_owned());
            }
            _ => source.push_str(&regex::escape(segment)),
        }
    }
    if params.is_empty() && source == "^" {
        source.push('/');
    } else {
        source.push_str("/?");
    }
    source.push('$');

    let pattern = Regex::new(&source)
        .map_err(|e| Error::InvalidArgument(format!("bad route path '{}': {}", path, e)))?;
    Ok((pattern, params))
}
