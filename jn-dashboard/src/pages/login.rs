use dioxus::prelude::*;
use jn_ui::session::Role;
use jn_ui::state::AppState;

fn role_card_style(selected: bool) -> &'static str {
    if selected {
        "flex: 1; padding: 20px; border: 2px solid #145DA0; border-radius: 10px; \
         background: #EAF3FB; cursor: pointer; text-align: left;"
    } else {
        "flex: 1; padding: 20px; border: 2px solid #D1D5DB; border-radius: 10px; \
         background: #FFFFFF; cursor: pointer; text-align: left;"
    }
}

#[component]
pub fn Login() -> Element {
    let state = use_context::<AppState>();
    let mut selected_role = use_signal(|| None::<Role>);
    let chosen = selected_role();

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; \
                      background: linear-gradient(160deg, #0B3954 0%, #145DA0 100%);",
            div { style: "width: 560px; max-width: 92vw; background: #FFFFFF; border-radius: 14px; \
                          padding: 36px; box-shadow: 0 12px 40px rgba(0,0,0,0.25);",
                h1 { style: "margin: 0 0 4px 0; font-size: 1.6rem; color: #0B3954;",
                    "Welcome to JalNivikaran"
                }
                p { style: "margin: 0 0 24px 0; color: #6B7280;",
                    "Select your role to access the groundwater platform."
                }
                div { style: "display: flex; gap: 16px; margin-bottom: 24px;",
                    button {
                        style: role_card_style(chosen == Some(Role::Researcher)),
                        onclick: move |_| selected_role.set(Some(Role::Researcher)),
                        h3 { style: "margin: 0 0 6px 0; color: #0B3954;", "Researcher / Policy Maker" }
                        p { style: "margin: 0; font-size: 0.85rem; color: #6B7280;",
                            "Station analytics, forecasts, simulations and reports."
                        }
                    }
                    button {
                        style: role_card_style(chosen == Some(Role::Farmer)),
                        onclick: move |_| selected_role.set(Some(Role::Farmer)),
                        h3 { style: "margin: 0 0 6px 0; color: #0B3954;", "Farmer" }
                        p { style: "margin: 0; font-size: 0.85rem; color: #6B7280;",
                            "Local water levels, advisories and alerts."
                        }
                    }
                }
                button {
                    style: if chosen.is_some() {
                        "width: 100%; padding: 12px; border: none; border-radius: 8px; \
                         background: #145DA0; color: #FFFFFF; font-size: 1rem; cursor: pointer;"
                    } else {
                        "width: 100%; padding: 12px; border: none; border-radius: 8px; \
                         background: #CBD5E1; color: #64748B; font-size: 1rem; cursor: not-allowed;"
                    },
                    disabled: chosen.is_none(),
                    onclick: move |_| {
                        if let Some(role) = selected_role() {
                            state.login(role);
                        }
                    },
                    "Continue"
                }
            }
        }
    }
}
