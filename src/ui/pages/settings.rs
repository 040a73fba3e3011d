//! Website settings editor.

use dioxus::prelude::*;

use crate::menu::Role;
use crate::notify::Notice;
use crate::settings::{ImageField, SettingsForm, WebsiteSettings};
use crate::ui::components::{DashboardShell, ImageInput, TextAreaInput, TextInput};

/// Rejects oversized files as soon as they are picked: the input is
/// cleared and an error toast is shown, so nothing is uploaded.
const SETTINGS_SCRIPT: &str = r#"
(function () {
    const box = document.getElementById('settings-toasts');
    function showError(message) {
        if (!box) return;
        const el = document.createElement('div');
        el.className = 'toast toast-error';
        el.setAttribute('role', 'alert');
        el.textContent = message;
        box.replaceChildren(el);
    }
    document.querySelectorAll('input[type=file][data-max-bytes]').forEach(input => {
        input.addEventListener('change', () => {
            const max = Number(input.dataset.maxBytes);
            const file = input.files && input.files[0];
            if (file && file.size > max) {
                input.value = '';
                showError(file.name + ' is too large. Maximum size is 5MB.');
            }
        });
    });
})();
"#;

#[component]
pub fn SettingsPage(
    site: WebsiteSettings,
    role: Option<Role>,
    form: Option<SettingsForm>,
    notice: Option<Notice>,
) -> Element {
    rsx! {
        DashboardShell {
            title: "Website Settings".to_string(),
            current_path: "/dashboard/settings".to_string(),
            role: role,
            site: site,
            notice: notice,
            scripts: Some(SETTINGS_SCRIPT.to_string()),

            div { id: "settings-toasts" }
            if let Some(form) = form {
                {settings_form(&form)}
            } else {
                article { "Settings are not available right now. Reload the page to try again." }
            }
        }
    }
}

fn settings_form(form: &SettingsForm) -> Element {
    let v = form.values.clone();
    let year = v.established_year.map(|y| y.to_string()).unwrap_or_default();

    rsx! {
        form {
            method: "post",
            action: "/dashboard/settings",
            enctype: "multipart/form-data",

            fieldset {
                legend { strong { "School" } }
                TextInput { label: "School name", name: "schoolName", value: v.school_name.clone(), required: true }
                TextInput { label: "Tagline", name: "tagline", value: v.tagline.clone() }
                TextInput { label: "Established year", name: "establishedYear", value: year, input_type: "number" }
                TextAreaInput { label: "About", name: "aboutText", value: v.about_text.clone() }
            }
            fieldset {
                legend { strong { "Contact" } }
                TextInput { label: "Address", name: "address", value: v.address.clone() }
                TextInput { label: "Phone", name: "phone", value: v.phone.clone(), input_type: "tel" }
                TextInput { label: "Email", name: "email", value: v.email.clone(), input_type: "email" }
            }
            fieldset {
                legend { strong { "Principal" } }
                TextInput { label: "Principal name", name: "principalName", value: v.principal_name.clone() }
                TextAreaInput { label: "Principal's message", name: "principalMessage", value: v.principal_message.clone() }
            }
            fieldset {
                legend { strong { "Images" } }
                small { "PNG, JPEG or WebP, up to 5MB each." }
                for field in ImageField::ALL {
                    ImageInput {
                        field: field,
                        preview: form.previews.image(field).map(str::to_string),
                    }
                }
            }
            button { r#type: "submit", "Save settings" }
        }
    }
}
