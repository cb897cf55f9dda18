//! Chart container component with loading overlay.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS renderer draws into.
    pub id: String,
    /// Whether the data behind the chart is still loading.
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels.
    #[props(default = 160)]
    pub min_height: u32,
}

/// A container div for JS-rendered charts, with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #7b8794; font-size: 13px;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
