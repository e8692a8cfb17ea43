use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::station::Station;
use jn_ui::components::{ErrorDisplay, PageHeader};

const NOTIFICATIONS: &[(&str, &str)] = &[
    ("Critical", "Block-level drawdown alert acknowledged for two stations."),
    ("Info", "Quarterly synchronization with the central telemetry feed completed."),
    ("Info", "Monsoon recharge bulletin published to district offices."),
];

const REPORT_SHELF: &[(&str, &str)] = &[
    ("Annual Groundwater Assessment", "Network-wide level, recharge and zone summary."),
    ("Pre-Monsoon Bulletin", "Station depths ahead of the recharge season."),
    ("Extraction Compliance Review", "Draft vs sanctioned abstraction by block."),
];

/// Report generation page. The station dropdown is fed by the map feed;
/// the backend renders the PDF and this page only streams the bytes
/// into a browser download.
#[component]
pub fn Reports() -> Element {
    let client = use_hook(ApiClient::new);

    let mut stations = use_signal(Vec::<Station>::new);
    let mut selected = use_signal(String::new);
    let mut generating = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match client.map_stations().await {
                    Ok(list) => {
                        if selected.peek().is_empty() {
                            if let Some(first) = list.first() {
                                selected.set(first.id.clone());
                            }
                        }
                        stations.set(list);
                    }
                    Err(e) => log::error!("failed to fetch station list: {e}"),
                }
            });
        });
    }

    let on_generate = {
        let client = client.clone();
        move |_| {
            let station = selected();
            if station.is_empty() {
                return;
            }
            let client = client.clone();
            generating.set(true);
            error.set(None);
            spawn(async move {
                match client.generate_report(&station).await {
                    Ok(bytes) => {
                        let file_name = format!("Station_Report_{station}.pdf");
                        if let Err(e) = jn_ui::js_bridge::download_blob(
                            &bytes,
                            &file_name,
                            "application/pdf",
                        ) {
                            log::error!("report download failed: {e}");
                            error.set(Some("The report could not be saved.".into()));
                        }
                    }
                    Err(e) => {
                        log::error!("report generation failed: {e}");
                        error.set(Some("Report generation failed on the server.".into()));
                    }
                }
                generating.set(false);
            });
        }
    };

    let station_list = stations.read().clone();
    let no_station = selected().is_empty();
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        PageHeader {
            title: "Reports",
            subtitle: "Station PDFs, bulletins and network notifications",
        }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Station Report" }
                p { style: "margin: 0 0 12px 0; font-size: 0.85rem; color: #6B7280;",
                    "Generates a PDF with the station's history, forecast and zone \
                     classification."
                }
                select {
                    style: "width: 100%; padding: 6px;",
                    disabled: station_list.is_empty(),
                    onchange: move |evt: Event<FormData>| selected.set(evt.value()),
                    if station_list.is_empty() {
                        option { value: "", "No stations available" }
                    }
                    for station in station_list.iter() {
                        option {
                            value: "{station.id}",
                            selected: station.id == selected(),
                            "{station.name}"
                        }
                    }
                }
                button {
                    style: "margin-top: 12px; padding: 10px 18px; border: none; border-radius: 6px; \
                            background: #145DA0; color: #FFFFFF; cursor: pointer;",
                    disabled: generating() || no_station,
                    onclick: on_generate,
                    if generating() { "Generating..." } else { "Generate PDF Report" }
                }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Notifications" }
                for (kind, text) in NOTIFICATIONS.iter().copied() {
                    div { style: "padding: 8px 0; border-bottom: 1px solid #F3F4F6; font-size: 0.85rem;",
                        span {
                            style: if kind == "Critical" {
                                "color: #E53935; font-weight: 600; margin-right: 8px;"
                            } else {
                                "color: #145DA0; font-weight: 600; margin-right: 8px;"
                            },
                            "{kind}"
                        }
                        "{text}"
                    }
                }
            }
            div { style: "{card} grid-column: span 2;",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Published Reports" }
                for (title, blurb) in REPORT_SHELF.iter().copied() {
                    div { style: "display: flex; justify-content: space-between; align-items: center; \
                                  padding: 10px 0; border-bottom: 1px solid #F3F4F6;",
                        div {
                            p { style: "margin: 0; font-weight: 600; font-size: 0.9rem;", "{title}" }
                            p { style: "margin: 2px 0 0 0; font-size: 0.8rem; color: #6B7280;", "{blurb}" }
                        }
                        span { style: "font-size: 0.8rem; color: #9CA3AF;", "PDF" }
                    }
                }
            }
        }
    }
}
