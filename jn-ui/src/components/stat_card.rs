//! Summary stat card for the dashboard metrics grid.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    /// Pre-formatted value, rendered unmodified
    pub value: String,
    #[props(default = String::new())]
    pub unit: String,
    #[props(default = String::new())]
    pub subtext: String,
    /// "default" | "safe" | "warning" | "critical"
    #[props(default = String::from("default"))]
    pub tone: String,
}

fn accent(tone: &str) -> &'static str {
    match tone {
        "safe" => "#4CA965",
        "warning" => "#FFA000",
        "critical" => "#E53935",
        _ => "#3E5C76",
    }
}

/// One metric card: title, big value with unit, optional subtext.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let accent = accent(&props.tone);

    rsx! {
        div {
            style: "background: #fff; border-radius: 16px; padding: 20px; border: 1px solid #E5E0D8; border-left: 4px solid {accent};",
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666; text-transform: uppercase; letter-spacing: 0.05em;",
                "{props.title}"
            }
            div {
                style: "display: flex; align-items: baseline; gap: 4px;",
                span {
                    style: "font-size: 28px; font-weight: 700; color: #1A1A1A;",
                    "{props.value}"
                }
                if !props.unit.is_empty() {
                    span {
                        style: "font-size: 14px; color: #666;",
                        "{props.unit}"
                    }
                }
            }
            if !props.subtext.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: {accent};",
                    "{props.subtext}"
                }
            }
        }
    }
}
