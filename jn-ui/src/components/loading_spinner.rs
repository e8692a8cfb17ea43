//! Inline loading indicator for fetch-driven panels.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Progressive-tense label matching the page's action register
    /// ("Locating...", "Generating...").
    #[props(default = String::from("Loading..."))]
    pub message: String,
}

/// Small ring spinner with a label, used in chart overlays and
/// long-running action panels.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        style { "@keyframes jn-spin {{ to {{ transform: rotate(360deg); }} }}" }
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 8px; \
                    padding: 32px; color: #6B7280; font-size: 0.9rem;",
            span {
                style: "width: 14px; height: 14px; border: 2px solid #CBD5E1; \
                        border-top-color: #145DA0; border-radius: 50%; \
                        display: inline-block; animation: jn-spin 0.8s linear infinite;",
            }
            "{props.message}"
        }
    }
}
