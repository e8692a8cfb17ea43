use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::station::{Station, ZoneStatus};
use jn_ui::components::{ChartContainer, PageHeader};
use jn_ui::js_bridge;
use jn_ui::prep;
use serde_json::json;

const MAP_ID: &str = "live-map";

/// Full-page Leaflet map with a status filter and a synchronized
/// station list. Clicking a row selects it on the map; clicking again
/// deselects.
#[component]
pub fn LiveMap() -> Element {
    let client = use_hook(ApiClient::new);

    let mut stations = use_signal(Vec::<Station>::new);
    let mut filter = use_signal(|| None::<ZoneStatus>);
    let mut selected = use_signal(String::new);
    let mut loading = use_signal(|| true);

    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match client.map_stations().await {
                    Ok(list) => stations.set(list),
                    Err(e) => log::error!("failed to fetch map stations: {e}"),
                }
                loading.set(false);
            });
        });
    }

    use_effect(move || {
        let list = stations.read();
        let wanted = filter();
        let visible: Vec<&Station> = list
            .iter()
            .filter(|s| wanted.map_or(true, |status| s.status == status))
            .collect();
        if list.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = visible
            .iter()
            .map(|s| {
                json!({
                    "id": s.id,
                    "name": s.name,
                    "lat": s.lat,
                    "lng": s.lng,
                    "level": s.level,
                    "status": s.status.label(),
                    "color": prep::status_color(s.status),
                })
            })
            .collect();
        let config = json!({ "selectedId": selected() });
        js_bridge::render_station_map(
            MAP_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let wanted = filter();
    let rows: Vec<(Station, &'static str, bool)> = stations
        .read()
        .iter()
        .filter(|s| wanted.map_or(true, |status| s.status == status))
        .map(|s| {
            let is_selected = s.id == selected();
            (s.clone(), prep::status_color(s.status), is_selected)
        })
        .collect();
    let shown = rows.len();
    let total = stations.read().len();

    rsx! {
        PageHeader {
            title: "Live Map",
            subtitle: "Current status of every monitoring station ({shown} of {total} shown)",
        }
        div { style: "display: flex; gap: 8px; margin-bottom: 16px; flex-wrap: wrap;",
            button {
                style: chip_style(wanted.is_none(), "#3E5C76"),
                onclick: move |_| filter.set(None),
                "All"
            }
            for status in ZoneStatus::ALL.iter().copied() {
                button {
                    style: chip_style(wanted == Some(status), prep::status_color(status)),
                    onclick: move |_| {
                        filter.set(if filter() == Some(status) { None } else { Some(status) });
                    },
                    "{status}"
                }
            }
        }
        div { style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px;",
            div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                          box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                ChartContainer { id: MAP_ID.to_string(), loading: loading(), min_height: 520 }
            }
            div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                          box-shadow: 0 1px 4px rgba(0,0,0,0.08); max-height: 560px; overflow-y: auto;",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Stations" }
                for (station, color, is_selected) in rows {
                    button {
                        style: if is_selected {
                            "display: block; width: 100%; text-align: left; padding: 10px; \
                             border: 1px solid #145DA0; border-radius: 8px; margin-bottom: 8px; \
                             background: #EAF3FB; cursor: pointer;"
                        } else {
                            "display: block; width: 100%; text-align: left; padding: 10px; \
                             border: 1px solid #E5E7EB; border-radius: 8px; margin-bottom: 8px; \
                             background: #FFFFFF; cursor: pointer;"
                        },
                        onclick: {
                            let id = station.id.clone();
                            move |_| {
                                let next = toggle_selection(&selected(), &id);
                                selected.set(next);
                            }
                        },
                        div { style: "display: flex; justify-content: space-between;",
                            span { style: "font-weight: 600; font-size: 0.9rem;", "{station.name}" }
                            span { style: "color: {color}; font-size: 0.8rem; font-weight: 600;",
                                "{station.status}"
                            }
                        }
                        p { style: "margin: 4px 0 0 0; font-size: 0.8rem; color: #6B7280;",
                            "{station.level:.1} m bgl"
                        }
                    }
                }
            }
        }
    }
}

fn chip_style(active: bool, accent: &str) -> String {
    if active {
        format!(
            "padding: 6px 14px; border: 1px solid {accent}; border-radius: 16px; \
             background: {accent}; color: #FFFFFF; cursor: pointer; font-size: 0.85rem;"
        )
    } else {
        format!(
            "padding: 6px 14px; border: 1px solid {accent}; border-radius: 16px; \
             background: #FFFFFF; color: {accent}; cursor: pointer; font-size: 0.85rem;"
        )
    }
}

/// Clicking the already-selected station clears the selection; anything
/// else becomes the new selection.
fn toggle_selection(current: &str, clicked: &str) -> String {
    if current == clicked {
        String::new()
    } else {
        clicked.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_selection;

    #[test]
    fn clicking_a_station_selects_it() {
        assert_eq!(toggle_selection("", "23.5_77.4"), "23.5_77.4");
        assert_eq!(toggle_selection("8.1_77.5", "23.5_77.4"), "23.5_77.4");
    }

    #[test]
    fn clicking_the_selected_station_restores_the_default() {
        assert_eq!(toggle_selection("23.5_77.4", "23.5_77.4"), "");
    }
}
