//! JalNivikaran groundwater dashboard.
//!
//! Single-page browser app. All analytics run on the backend; this binary
//! fetches JSON, keeps session and page state in signals, and hands chart
//! data to the D3/Leaflet bridge in `jn-ui`.

mod pages;
mod sidebar;

use dioxus::prelude::*;
use jn_ui::js_bridge;
use jn_ui::session::{resolve, Page};
use jn_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("jalnivikaran-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    use_effect(move || {
        js_bridge::init_charts();
    });

    // Every render re-checks the gate, so a logout can never leave a
    // role-locked page on screen.
    let page = {
        let session = state.session.read();
        resolve((state.page)(), &session)
    };

    let shell_style = "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
         min-height: 100vh; background: #F4F7F6; color: #1F2937;";

    let body = match page {
        Page::Login => rsx! { pages::Login {} },
        Page::Farmer => rsx! { pages::FarmerDashboard {} },
        Page::Dashboard => rsx! { ResearcherShell { active: page, pages::Dashboard {} } },
        Page::Analytics => rsx! { ResearcherShell { active: page, pages::Analytics {} } },
        Page::Prediction => rsx! { ResearcherShell { active: page, pages::FuturePrediction {} } },
        Page::ModelPerformance => {
            rsx! { ResearcherShell { active: page, pages::ModelPerformance {} } }
        }
        Page::Reports => rsx! { ResearcherShell { active: page, pages::Reports {} } },
        Page::LiveMap => rsx! { ResearcherShell { active: page, pages::LiveMap {} } },
        Page::Simulation => rsx! { ResearcherShell { active: page, pages::Simulation {} } },
        Page::Predict => rsx! { ResearcherShell { active: page, pages::Predict {} } },
    };

    rsx! {
        div { style: "{shell_style}", {body} }
    }
}

/// Fixed sidebar plus a scrollable content pane, shared by every
/// researcher page.
#[component]
fn ResearcherShell(active: Page, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; min-height: 100vh;",
            sidebar::Sidebar { active }
            main { style: "flex: 1; padding: 24px 32px; overflow-x: hidden;", {children} }
        }
    }
}
