//! # Pattern Compiler
//!
//! Translates a route pattern string into an anchored [`Regex`] with named
//! capture groups. Compilation happens once per route at table-construction
//! time; matching reuses the compiled value.
//!
//! ## Pattern mini-language
//!
//! - Literal characters match themselves (`admin/users`).
//! - `<name>` captures one path segment into the parameter `name`. Without a
//!   constraint it matches the segment class: one or more characters that are
//!   not `/ . , ; ?` or a newline.
//! - `(...)` marks an optional group. Groups may nest; inner groups can fail
//!   to match independently of outer ones, so
//!   `admin/(<controller>(/<action>(/<id>)))` accepts `admin`,
//!   `admin/users`, `admin/users/edit` and `admin/users/edit/7`.
//! - A constraint map entry replaces the segment class for exactly that
//!   placeholder name, e.g. `id -> \d+`.
//!
//! ## Rewrite order
//!
//! The translation is a fixed sequence of rewrites; each step assumes the
//! output shape of the previous one:
//!
//! 1. Escape regex metacharacters that are literals in the mini-language.
//! 2. Rewrite `(` / `)` into non-capturing optional groups.
//! 3. Rewrite `<name>` into named capture groups, substituting constraints.
//! 4. Anchor the whole expression at both ends.
//!
//! The `regex` crate matches with finite automata, so an unconstrained
//! segment class cannot backtrack catastrophically regardless of input.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Segment class: what an unconstrained placeholder accepts. Unicode-aware,
/// one or more code points excluding `/ . , ; ?` and newline.
pub const SEGMENT: &str = r"[^/.,;?\n]+";

/// Metacharacters that are plain literals in the pattern mini-language.
/// `( ) < >` are mini-language syntax and must stay unescaped.
const ESCAPE: &[char] = &[
    '.', '\\', '+', '*', '?', '[', '^', ']', '$', '{', '}', '=', '!', '|',
];

/// Error produced while compiling a single route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Optional-group parentheses do not pair up.
    UnbalancedGroups {
        /// The offending pattern, verbatim.
        pattern: String,
    },
    /// A `<` placeholder is unterminated, or its name is empty or not a
    /// valid capture-group identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    InvalidPlaceholder {
        /// The offending pattern, verbatim.
        pattern: String,
        /// The placeholder text as far as it could be read.
        placeholder: String,
    },
    /// The rewritten expression was rejected by the regex engine, which
    /// almost always means a malformed constraint fragment.
    BadExpression {
        /// The offending pattern, verbatim.
        pattern: String,
        /// The engine's own description of the failure.
        detail: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnbalancedGroups { pattern } => {
                write!(
                    f,
                    "pattern error: unbalanced optional-group parentheses in '{}'",
                    pattern
                )
            }
            PatternError::InvalidPlaceholder {
                pattern,
                placeholder,
            } => {
                write!(
                    f,
                    "pattern error: invalid placeholder '<{}' in '{}'. \
                    Placeholder names must match [A-Za-z_][A-Za-z0-9_]* and be closed with '>'",
                    placeholder, pattern
                )
            }
            PatternError::BadExpression { pattern, detail } => {
                write!(
                    f,
                    "pattern error: '{}' did not compile to a valid expression: {}",
                    pattern, detail
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Compile a route pattern plus its constraint map into an anchored regex.
///
/// Pure function; no shared state. Errors here are configuration errors and
/// surface at table-construction time, never during dispatch.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// let constraints = HashMap::from([("id".to_string(), r"\d+".to_string())]);
/// let re = trailhead::pattern::compile("item/<id>", &constraints).unwrap();
/// assert!(re.is_match("item/42"));
/// assert!(!re.is_match("item/abc"));
/// ```
pub fn compile(
    pattern: &str,
    constraints: &HashMap<String, String>,
) -> Result<Regex, PatternError> {
    let escaped = escape_literals(pattern);
    let grouped = rewrite_groups(&escaped, pattern)?;
    let named = rewrite_placeholders(&grouped, pattern, constraints)?;
    let anchored = format!("^{named}$");

    Regex::new(&anchored).map_err(|err| PatternError::BadExpression {
        pattern: pattern.to_string(),
        detail: err.to_string(),
    })
}

/// Step 1: backslash-escape every metacharacter that the mini-language
/// treats as a literal.
fn escape_literals(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    for ch in pattern.chars() {
        if ESCAPE.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Step 2: turn `(` into a non-capturing opener and `)` into a zero-or-one
/// closer, validating nesting along the way.
fn rewrite_groups(expression: &str, pattern: &str) -> Result<String, PatternError> {
    let mut out = String::with_capacity(expression.len() + 8);
    let mut depth: usize = 0;
    for ch in expression.chars() {
        match ch {
            '(' => {
                depth += 1;
                out.push_str("(?:");
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| PatternError::UnbalancedGroups {
                        pattern: pattern.to_string(),
                    })?;
                out.push_str(")?");
            }
            _ => out.push(ch),
        }
    }
    if depth != 0 {
        return Err(PatternError::UnbalancedGroups {
            pattern: pattern.to_string(),
        });
    }
    Ok(out)
}

/// Step 3: turn each `<name>` into a named capture group. The group body is
/// the constraint fragment registered for exactly `name`, falling back to
/// [`SEGMENT`]. A lone `>` passes through as a literal.
fn rewrite_placeholders(
    expression: &str,
    pattern: &str,
    constraints: &HashMap<String, String>,
) -> Result<String, PatternError> {
    let mut out = String::with_capacity(expression.len() + 16);
    let mut chars = expression.chars();
    while let Some(ch) = chars.next() {
        if ch != '<' {
            out.push(ch);
            continue;
        }
        let mut name = String::new();
        let mut closed = false;
        for inner in chars.by_ref() {
            if inner == '>' {
                closed = true;
                break;
            }
            name.push(inner);
        }
        if !closed || !valid_name(&name) {
            return Err(PatternError::InvalidPlaceholder {
                pattern: pattern.to_string(),
                placeholder: name,
            });
        }
        let body = constraints.get(&name).map_or(SEGMENT, String::as_str);
        out.push_str("(?P<");
        out.push_str(&name);
        out.push('>');
        out.push_str(body);
        out.push(')');
    }
    Ok(out)
}

fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
