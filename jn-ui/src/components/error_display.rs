//! Inline error banner for failed fetches and refused submissions.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// User-facing text; callers keep backend detail in the log, not here.
    pub message: String,
}

/// Left-accented banner in the dashboard's critical palette.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: baseline; gap: 8px; padding: 10px 16px; \
                    margin: 0 0 16px 0; background: #FDECEA; color: #B71C1C; \
                    border-left: 4px solid #E53935; border-radius: 6px; font-size: 0.9rem;",
            span { style: "font-weight: 600;", "\u{26A0}" }
            "{props.message}"
        }
    }
}
