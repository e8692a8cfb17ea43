//! Reusable Dioxus RSX components for the dashboard pages.

mod chart_container;
mod error_display;
mod file_picker;
mod loading_spinner;
mod page_header;
mod stat_card;
mod station_selector;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use file_picker::{require_file, FilePicker, SelectedFile};
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use station_selector::StationSelector;
