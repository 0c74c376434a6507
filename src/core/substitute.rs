//! Variable substitution
//!
//! Rewrites `$NAME` and `${NAME}` references inside a single string. The
//! braced form tolerates spaces and tabs inside the braces (`${ NAME }`).
//!
//! Names are applied one after another in mapping order. Each name makes a
//! single left-to-right pass over the current text and inserts its raw value
//! literally, so there is no fixed-point iteration and no recursion. Text
//! inserted for an earlier name is still visible to later names.
//!
//! Unknown references are left verbatim; substitution never fails.

use crate::domain::VarMap;
use regex::{NoExpand, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Compiled substitution patterns for one mapping
///
/// Build once and apply to every value that shares the same source mapping.
///
/// # Examples
///
/// ```
/// use setup_vars::core::substitute::Substitutor;
/// use setup_vars::domain::VarMap;
///
/// let vars: VarMap = [("A", "x"), ("B", "y")].into_iter().collect();
/// let substitutor = Substitutor::new(&vars);
///
/// assert_eq!(substitutor.apply("$A/${B}"), "x/y");
/// assert_eq!(substitutor.apply("$Ab"), "$Ab");
/// ```
#[derive(Debug, Clone)]
pub struct Substitutor {
    rules: Vec<(Regex, String)>,
}

impl Substitutor {
    /// Compiles one pattern per name in `vars`, keeping mapping order
    pub fn new(vars: &VarMap) -> Self {
        let rules = vars
            .iter()
            .filter_map(|(name, value)| match reference_pattern(name) {
                Ok(pattern) => Some((pattern, value.to_string())),
                Err(e) => {
                    tracing::warn!(
                        name = %name,
                        error = %e,
                        "Variable name cannot be matched, references to it are left as-is"
                    );
                    None
                }
            })
            .collect();

        Self { rules }
    }

    /// Substitutes every known reference in `value`
    pub fn apply(&self, value: &str) -> String {
        let mut result = value.to_string();
        for (pattern, replacement) in &self.rules {
            result = pattern
                .replace_all(&result, NoExpand(replacement))
                .into_owned();
        }
        result
    }
}

/// Substitutes `$NAME` / `${NAME}` references in `value` using `vars`
///
/// Convenience wrapper around [`Substitutor`] for a single string.
///
/// # Examples
///
/// ```
/// use setup_vars::core::substitute;
/// use setup_vars::domain::VarMap;
///
/// let vars: VarMap = [("A", "x"), ("B", "y")].into_iter().collect();
/// assert_eq!(substitute("${ A }-${\tB\t}", &vars), "x-y");
/// assert_eq!(substitute("$MISSING", &vars), "$MISSING");
/// ```
pub fn substitute(value: &str, vars: &VarMap) -> String {
    Substitutor::new(vars).apply(value)
}

/// Builds the pattern matching `$NAME` (followed by a word boundary) or `${ NAME }`
fn reference_pattern(name: &str) -> Result<Regex, regex::Error> {
    let name = regex::escape(name);
    Regex::new(&format!(r"\$(?:{name}\b|\{{[ \t]*{name}[ \t]*\}})"))
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$(?:([A-Za-z_][A-Za-z0-9_]*)|\{[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*\})")
            .expect("identifier pattern is a valid regex")
    })
}

/// Lists the identifier-shaped names referenced by `value`, sorted and deduplicated
///
/// Used for diagnostics only; substitution itself matches whatever names the
/// mapping contains.
///
/// # Examples
///
/// ```
/// use setup_vars::core::substitute::referenced_names;
///
/// let names = referenced_names("gs://$PROJECT_ID/${ RUN_ID }/$PROJECT_ID");
/// assert_eq!(names, ["PROJECT_ID", "RUN_ID"]);
/// ```
pub fn referenced_names(value: &str) -> Vec<String> {
    identifier_pattern()
        .captures_iter(value)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|name| name.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
