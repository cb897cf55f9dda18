//! Loading indicator.

use dioxus::prelude::*;

/// Simple loading indicator for page-level fetches.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 32px; color: #7b8794; font-size: 13px;",
            "Loading data..."
        }
    }
}
