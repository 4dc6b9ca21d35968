//! Route path patterns
//!
//! Compiles route templates such as `/producto/:id/movimientos` into
//! anchored, case-insensitive regular expressions. A prefix pattern also
//! matches any deeper path (`/inventario` matches `/inventario/123`); an
//! exact pattern matches only the template itself.

use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashMap;

/// Compiled route template
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
    params: Vec<String>,
    exact: bool,
}

impl PathPattern {
    /// Compile a route template.
    ///
    /// The template must start with `/`. Segments starting with `:` are
    /// parameters and match exactly one non-empty path segment; every other
    /// segment matches literally, ignoring case. Unless `exact` is set, any
    /// further segments after the template are accepted.
    pub fn new(template: &str, exact: bool) -> Result<Self, ConfigError> {
        if !template.starts_with('/') {
            return Err(ConfigError::InvalidPattern {
                pattern: template.to_string(),
                reason: "route templates must start with '/'".to_string(),
            });
        }

        let mut expr = String::from("(?i)^");
        let mut params = Vec::new();

        for segment in template.trim_end_matches('/').split('/').skip(1) {
            expr.push('/');
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() || params.iter().any(|p| p == name) {
                    return Err(ConfigError::InvalidPattern {
                        pattern: template.to_string(),
                        reason: format!("invalid or duplicate parameter ':{}'", name),
                    });
                }
                expr.push_str(&format!("(?P<{}>[^/]+)", name));
                params.push(name.to_string());
            } else if segment.is_empty() {
                return Err(ConfigError::InvalidPattern {
                    pattern: template.to_string(),
                    reason: "empty path segment".to_string(),
                });
            } else {
                expr.push_str(&regex::escape(segment));
            }
        }

        if expr == "(?i)^" {
            expr.push('/');
        } else if !exact {
            expr.push_str("(?:/.*)?");
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|e| ConfigError::InvalidPattern {
            pattern: template.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: template.to_string(),
            regex,
            params,
            exact,
        })
    }

    /// The template this pattern was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check if a request path matches. A single trailing `/` is ignored.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(normalize(path))
    }

    /// Match a request path, returning the captured parameters
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(normalize(path))?;
        Some(
            self.params
                .iter()
                .filter_map(|name| {
                    caps.name(name)
                        .map(|m| (name.clone(), m.as_str().to_string()))
                })
                .collect(),
        )
    }

    /// Names of the template parameters, in order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

/// Drop a single trailing `/`, keeping the root path intact
pub(crate) fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
