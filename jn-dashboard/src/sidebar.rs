use dioxus::prelude::*;
use jn_ui::session::Page;
use jn_ui::state::AppState;

const NAV_ITEMS: &[(Page, &str, &str)] = &[
    (Page::Dashboard, "\u{1F4CA}", "Overview"),
    (Page::Analytics, "\u{1F4C8}", "Analytics"),
    (Page::Prediction, "\u{1F52E}", "Future Projection"),
    (Page::ModelPerformance, "\u{1F9EA}", "Model Performance"),
    (Page::Simulation, "\u{1F30E}", "Scenario Simulation"),
    (Page::Predict, "\u{1F4C4}", "Batch Prediction"),
    (Page::Reports, "\u{1F4C1}", "Reports"),
    (Page::LiveMap, "\u{1F5FA}", "Live Map"),
];

#[component]
pub fn Sidebar(active: Page) -> Element {
    let state = use_context::<AppState>();

    rsx! {
        nav { style: "width: 230px; flex-shrink: 0; background: #0B3954; color: #E5E7EB; \
                      display: flex; flex-direction: column; padding: 20px 0;",
            div { style: "padding: 0 20px 20px 20px; border-bottom: 1px solid rgba(255,255,255,0.15);",
                h2 { style: "margin: 0; font-size: 1.2rem; color: #FFFFFF;", "JalNivikaran" }
                p { style: "margin: 4px 0 0 0; font-size: 0.75rem; color: #9FB3C8;",
                    "Groundwater Intelligence"
                }
            }
            div { style: "flex: 1; padding-top: 12px;",
                for (page, icon, label) in NAV_ITEMS.iter().copied() {
                    button {
                        style: if page == active {
                            "display: block; width: 100%; text-align: left; padding: 10px 20px; \
                             border: none; cursor: pointer; font-size: 0.9rem; \
                             background: #145DA0; color: #FFFFFF; border-left: 3px solid #2BB3C0;"
                        } else {
                            "display: block; width: 100%; text-align: left; padding: 10px 20px; \
                             border: none; cursor: pointer; font-size: 0.9rem; \
                             background: transparent; color: #C9D6DF; border-left: 3px solid transparent;"
                        },
                        onclick: move |_| state.navigate(page),
                        span { style: "margin-right: 8px;", "{icon}" }
                        "{label}"
                    }
                }
            }
            button {
                style: "margin: 12px 20px 0 20px; padding: 8px 12px; border: 1px solid #9FB3C8; \
                        border-radius: 6px; background: transparent; color: #E5E7EB; cursor: pointer;",
                onclick: move |_| state.logout(),
                "Sign out"
            }
        }
    }
}
