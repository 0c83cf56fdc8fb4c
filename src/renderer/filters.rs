use log::warn;
use regex::Regex;

// Case conversions used by backend templates for module, class and table names
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        table::to_table_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
};

/// Tests whether `val` matches the regular expression `re`.
///
/// An invalid pattern is logged and treated as no match.
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Turns a free-form project title into a slug: lower-cased, spaces replaced by `_`.
pub fn slugify(val: &str) -> String {
    val.to_lowercase().replace(' ', "_")
}
