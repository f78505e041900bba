use crate::pattern::{self, PatternError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

/// One declarative route definition, as supplied by the caller (typically
/// deserialized from an application's routing config).
///
/// `pattern` is optional at this level so that a definition arriving without
/// one is reported as a [`BuildError::MissingPattern`] rather than failing
/// somewhere inside deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDef {
    /// Route identifier. Unique within a table; the first registration of a
    /// name wins and later duplicates are skipped.
    pub name: String,
    /// Pattern string, e.g. `admin/(<controller>(/<action>(/<id>)))`.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Fallback values for placeholders absent from a matched path.
    #[serde(default)]
    pub defaults: HashMap<String, String>,
    /// Per-placeholder regex fragments overriding the segment class.
    #[serde(default)]
    pub constraints: HashMap<String, String>,
}

impl RouteDef {
    /// Definition with a name and pattern, no defaults or constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: Some(pattern.into()),
            defaults: HashMap::new(),
            constraints: HashMap::new(),
        }
    }

    /// Add a default value for a placeholder.
    #[must_use]
    pub fn default_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Add a constraint fragment for a placeholder.
    #[must_use]
    pub fn constraint(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.constraints.insert(key.into(), fragment.into());
        self
    }
}

/// A route after compilation. Owned by the table, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    name: String,
    pattern: String,
    matcher: Regex,
    defaults: HashMap<String, String>,
}

impl CompiledRoute {
    /// Route identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source pattern this route was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Error raised while building a [`RouteTable`]. Any definition error aborts
/// the whole build; a table is either fully compiled or not usable at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A definition carried no `pattern` field.
    MissingPattern {
        /// Name of the offending definition.
        route: String,
    },
    /// A definition's pattern or constraint map failed to compile.
    Pattern {
        /// Name of the offending definition.
        route: String,
        /// The underlying compiler error.
        source: PatternError,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingPattern { route } => {
                write!(f, "route '{}' has no pattern", route)
            }
            BuildError::Pattern { route, source } => {
                write!(f, "route '{}': {}", route, source)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::MissingPattern { .. } => None,
            BuildError::Pattern { source, .. } => Some(source),
        }
    }
}

/// Result of resolving a path against a table: the matched route's name and
/// the merged parameter map (captures first, defaults filling the gaps).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the route that matched.
    pub route: String,
    /// Resolved parameters. Never empty; an empty merge reports no-match.
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Get a resolved parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered, immutable collection of compiled routes.
///
/// Built once at startup, then queried from any number of threads without
/// synchronization; `resolve` takes `&self` and the table holds no interior
/// mutability. A changed route set means building a fresh table (see
/// [`crate::hot_swap::SharedTable`] for atomic replacement under readers).
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Compile `definitions` into a table, preserving their order.
    ///
    /// Duplicate names are skipped (first registration wins). A definition
    /// without a pattern, or one whose pattern or constraints fail to
    /// compile, aborts the build.
    pub fn build(definitions: Vec<RouteDef>) -> Result<Self, BuildError> {
        let mut routes: Vec<CompiledRoute> = Vec::with_capacity(definitions.len());
        for def in definitions {
            if routes.iter().any(|r| r.name == def.name) {
                debug!(route = %def.name, "duplicate route name, keeping first registration");
                continue;
            }
            let Some(pattern) = def.pattern else {
                return Err(BuildError::MissingPattern { route: def.name });
            };
            let matcher = pattern::compile(&pattern, &def.constraints).map_err(|source| {
                BuildError::Pattern {
                    route: def.name.clone(),
                    source,
                }
            })?;
            routes.push(CompiledRoute {
                name: def.name,
                pattern,
                matcher,
                defaults: def.defaults,
            });
        }

        info!(route_count = routes.len(), "route table built");
        Ok(Self { routes })
    }

    /// Resolve `path` against the table, first-match-wins.
    ///
    /// Routes are tried strictly in registration order and iteration stops at
    /// the first matcher that succeeds; later routes are never attempted.
    /// Named groups that captured a non-empty span become parameters, then
    /// defaults fill in any keys still absent (captures always win). A match
    /// whose merged parameter map is empty reports no-match.
    ///
    /// The caller is expected to pass a path with leading and trailing
    /// slashes already trimmed.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        debug!(%path, "route match attempt");
        for route in &self.routes {
            let Some(caps) = route.matcher.captures(path) else {
                continue;
            };

            let mut params: HashMap<String, String> = HashMap::new();
            for name in route.matcher.capture_names().flatten() {
                if let Some(m) = caps.name(name) {
                    if !m.as_str().is_empty() {
                        params.insert(name.to_string(), m.as_str().to_string());
                    }
                }
            }
            for (key, value) in &route.defaults {
                if !params.contains_key(key) {
                    params.insert(key.clone(), value.clone());
                }
            }

            if params.is_empty() {
                debug!(
                    route = %route.name,
                    %path,
                    "matched with no captures and no defaults, reporting no match"
                );
                return None;
            }

            debug!(route = %route.name, %path, params = ?params, "route matched");
            return Some(RouteMatch {
                route: route.name.clone(),
                params,
            });
        }

        debug!(%path, "no route matched");
        None
    }

    /// Number of compiled routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route names in registration order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    /// Look up a compiled route by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CompiledRoute> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Print all registered routes to stdout.
    ///
    /// Useful for verifying that a routing config loaded as expected.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            println!("[route] {} -> {}", route.name, route.pattern);
        }
    }
}
