//! Inline error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a non-fatal error inline; the rest of the page stays usable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #fdecea; color: #b71c1c; border-radius: 6px; border: 1px solid #f5c6c0; font-size: 13px;",
            "{props.message}"
        }
    }
}
