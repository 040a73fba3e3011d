//! Labelled form controls for the settings editor.

use dioxus::prelude::*;

use crate::settings::{ImageField, MAX_IMAGE_BYTES};

/// A labelled single-line input.
#[component]
pub fn TextInput(
    label: &'static str,
    name: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label {
            "{label}"
            input {
                r#type: input_type,
                name: name,
                value: "{value}",
                required: required,
            }
        }
    }
}

/// A labelled multi-line input.
#[component]
pub fn TextAreaInput(label: &'static str, name: &'static str, value: String) -> Element {
    rsx! {
        label {
            "{label}"
            textarea { name: name, rows: "4", "{value}" }
        }
    }
}

/// Image picker with the current image as preview.
#[component]
pub fn ImageInput(field: ImageField, preview: Option<String>) -> Element {
    let label = field.label();
    let name = field.form_name();

    rsx! {
        label {
            "{label}"
            if let Some(src) = preview {
                img { class: "image-preview", src: "{src}", alt: "Current {label}" }
            } else {
                small { " (none uploaded)" }
            }
            input {
                r#type: "file",
                name: name,
                accept: "image/*",
                "data-max-bytes": "{MAX_IMAGE_BYTES}",
            }
        }
    }
}
