//! Dropdown selector for choosing a monitoring station.

use crate::state::AppState;
use dioxus::prelude::*;

/// Station dropdown selector.
/// Reads available stations from AppState and updates selected_station
/// on change. Disabled while the station list is empty so
/// station-dependent pages degrade instead of breaking.
#[component]
pub fn StationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let stations = state.stations.read().clone();
    let selected = (state.selected_station)();
    let empty = stations.is_empty();

    let on_change = move |evt: Event<FormData>| {
        state.selected_station.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "station-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Station: "
            }
            select {
                id: "station-select",
                disabled: empty,
                onchange: on_change,
                if empty {
                    option { value: "", "No stations available" }
                }
                for station in stations.iter() {
                    option {
                        value: "{station.id}",
                        selected: station.id == selected,
                        "{station.name} ({station.district})"
                    }
                }
            }
        }
    }
}
