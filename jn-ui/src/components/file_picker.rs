//! File picker for the CSV upload flows.

use dioxus::prelude::*;

/// A file read into memory, ready to be sent as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Guard an upload-driven action: refuse without a selected file.
///
/// The refusal message matches the original behavior of the
/// "Upload & Predict" and "Run Simulation" actions; callers must not
/// issue any network request when this returns `Err`.
pub fn require_file(file: Option<&SelectedFile>) -> Result<&SelectedFile, &'static str> {
    file.ok_or("Please upload a CSV file first")
}

#[derive(Props, Clone, PartialEq)]
pub struct FilePickerProps {
    /// Accepted extensions, e.g. ".csv"
    #[props(default = String::from(".csv"))]
    pub accept: String,
    /// Called once the chosen file's bytes are in memory
    pub on_select: EventHandler<SelectedFile>,
}

/// File input that reads the chosen file into memory and reports it
/// upward. Read failures are logged and leave the previous selection
/// untouched.
#[component]
pub fn FilePicker(props: FilePickerProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        input {
            r#type: "file",
            accept: "{props.accept}",
            onchange: move |evt: Event<FormData>| async move {
                let Some(file) = evt.files().into_iter().next() else {
                    return;
                };
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => on_select.call(SelectedFile {
                        name,
                        bytes: bytes.to_vec(),
                    }),
                    Err(e) => log::error!("failed to read selected file: {e}"),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_refused() {
        let refusal = require_file(None);
        assert_eq!(refusal, Err("Please upload a CSV file first"));
    }

    #[test]
    fn selected_file_passes_the_guard() {
        let file = SelectedFile {
            name: "dataset.csv".to_string(),
            bytes: b"LAT,LON\n".to_vec(),
        };
        let passed = require_file(Some(&file)).unwrap();
        assert_eq!(passed.name, "dataset.csv");
    }
}
