//! Compiled regex helpers shared by the classifier, field extractor and
//! date normalizer

use regex::Regex;

/// Compile a built-in pattern
///
/// Every caller passes a string literal, so a failure here is a programming
/// error caught by the unit tests.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Declare a function returning a regex compiled once per process
macro_rules! static_regex {
    ($(#[$meta:meta])* $vis:vis fn $name:ident = $pattern:expr;) => {
        $(#[$meta])*
        $vis fn $name() -> &'static ::regex::Regex {
            static RE: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            RE.get_or_init(|| $crate::patterns::compile($pattern))
        }
    };
}

pub(crate) use static_regex;
