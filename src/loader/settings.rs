//! Website settings: branding lookup, editor load and sequential submit.

use tracing::{debug, info, warn};

use super::ViewScope;
use crate::backend::{BackendError, SchoolApi};
use crate::notify::Notice;
use crate::settings::{ImageField, SettingsError, SettingsForm, WebsiteSettings};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] SettingsError),
    #[error("{step} failed: {source}")]
    Backend {
        step: &'static str,
        #[source]
        source: BackendError,
    },
}

impl SubmitError {
    pub fn to_notice(&self) -> Notice {
        match self {
            SubmitError::Invalid(e) => Notice::error(e.to_string()),
            SubmitError::Backend { source, .. } => source.to_notice(),
        }
    }
}

/// Settings for public page branding; falls back to `fallback` when the
/// backend cannot be reached.
pub async fn load_branding(api: &dyn SchoolApi, fallback: &WebsiteSettings) -> WebsiteSettings {
    match api.get_settings().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Website settings unavailable, using configured defaults: {}", e);
            fallback.clone()
        }
    }
}

/// Fetch current settings into an editable form.
pub async fn load_settings_form(
    api: &dyn SchoolApi,
    scope: &ViewScope,
) -> Option<Result<SettingsForm, Notice>> {
    scope
        .run(async {
            api.get_settings()
                .await
                .map(|s| SettingsForm::from_settings(&s))
                .map_err(|e| {
                    warn!("Loading settings for editor failed: {}", e);
                    e.to_notice()
                })
        })
        .await
}

/// Push the form to the backend: text first, then each staged image in
/// [`ImageField::ALL`] order, one request at a time. Stops at the first
/// failure; requests already completed are not rolled back.
pub async fn submit_settings(
    api: &dyn SchoolApi,
    form: &SettingsForm,
) -> Result<WebsiteSettings, SubmitError> {
    form.validate()?;

    let mut latest = api
        .update_settings(&form.values)
        .await
        .map_err(|source| SubmitError::Backend {
            step: "settings update",
            source,
        })?;
    debug!("Settings text saved");

    for (field, file) in form.pending_uploads() {
        latest = api
            .upload_image(field, file)
            .await
            .map_err(|source| SubmitError::Backend {
                step: upload_step(field),
                source,
            })?;
        debug!("Uploaded {} ({} bytes)", field.form_name(), file.size());
    }

    info!(
        "Website settings saved ({} image uploads)",
        form.pending_uploads().len()
    );
    Ok(latest)
}

fn upload_step(field: ImageField) -> &'static str {
    match field {
        ImageField::Logo => "logo upload",
        ImageField::Banner => "banner upload",
        ImageField::PrincipalImage => "principal photo upload",
        ImageField::ChairmanImage => "chairman photo upload",
    }
}
