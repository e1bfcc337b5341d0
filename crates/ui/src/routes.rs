use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::WorkbookView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:print", WorkbookView)] Workbook { print: String },
}

/// Whether the `print` query parameter asks for automatic print mode.
/// The published workbook linked `?print=1`; a plain `true` also works.
#[must_use]
pub fn print_param_enabled(raw: &str) -> bool {
    matches!(raw, "1" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_param_accepts_the_documented_values() {
        assert!(print_param_enabled("1"));
        assert!(print_param_enabled("true"));
        assert!(!print_param_enabled(""));
        assert!(!print_param_enabled("0"));
        assert!(!print_param_enabled("yes"));
    }
}
