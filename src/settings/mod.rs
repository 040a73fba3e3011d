//! Website settings: wire model, editable form state and client-side checks.
//!
//! The form mirrors the fetched settings. Text changes go out as one
//! [`SettingsUpdate`]; each image is staged separately and uploaded to its
//! own endpoint (see `loader::settings`).

use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Largest accepted image upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const MIN_ESTABLISHED_YEAR: u32 = 1800;

#[allow(clippy::expect_used)] // literal pattern, checked by tests
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[allow(clippy::expect_used)] // literal pattern, checked by tests
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").expect("phone pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{file_name} is too large. Maximum size is 5MB.")]
    TooLarge { file_name: String, size: usize },
    #[error("{file_name} is not an image.")]
    NotAnImage { file_name: String },
    #[error("School name is required.")]
    MissingSchoolName,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter a valid phone number.")]
    InvalidPhone,
    #[error("Established year must be between 1800 and {max}.")]
    InvalidYear { max: i32 },
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteSettings {
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub established_year: Option<u32>,
    #[serde(default)]
    pub principal_name: String,
    #[serde(default)]
    pub principal_message: String,
    #[serde(default)]
    pub about_text: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub principal_image: Option<String>,
    #[serde(default)]
    pub chairman_image: Option<String>,
}

impl WebsiteSettings {
    pub fn image(&self, field: ImageField) -> Option<&str> {
        match field {
            ImageField::Logo => self.logo.as_deref(),
            ImageField::Banner => self.banner.as_deref(),
            ImageField::PrincipalImage => self.principal_image.as_deref(),
            ImageField::ChairmanImage => self.chairman_image.as_deref(),
        }
    }
}

/// Text and number fields sent with `PUT /settings`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub school_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub established_year: Option<u32>,
    pub principal_name: String,
    pub principal_message: String,
    pub about_text: String,
}

impl From<&WebsiteSettings> for SettingsUpdate {
    fn from(s: &WebsiteSettings) -> Self {
        Self {
            school_name: s.school_name.clone(),
            tagline: s.tagline.clone(),
            address: s.address.clone(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            established_year: s.established_year,
            principal_name: s.principal_name.clone(),
            principal_message: s.principal_message.clone(),
            about_text: s.about_text.clone(),
        }
    }
}

/// Image slots, each with its own upload endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageField {
    Logo,
    Banner,
    PrincipalImage,
    ChairmanImage,
}

impl ImageField {
    /// Upload order.
    pub const ALL: [ImageField; 4] = [
        ImageField::Logo,
        ImageField::Banner,
        ImageField::PrincipalImage,
        ImageField::ChairmanImage,
    ];

    /// Form input name and backend path segment.
    pub fn form_name(&self) -> &'static str {
        match self {
            ImageField::Logo => "logo",
            ImageField::Banner => "banner",
            ImageField::PrincipalImage => "principalImage",
            ImageField::ChairmanImage => "chairmanImage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageField::Logo => "Logo",
            ImageField::Banner => "Banner",
            ImageField::PrincipalImage => "Principal photo",
            ImageField::ChairmanImage => "Chairman photo",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Self> {
        ImageField::ALL.into_iter().find(|f| f.form_name() == name)
    }
}

/// A file picked in the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSelection {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileSelection {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Reject files over [`MAX_IMAGE_BYTES`].
pub fn validate_image_size(file_name: &str, size: usize) -> Result<(), SettingsError> {
    if size > MAX_IMAGE_BYTES {
        return Err(SettingsError::TooLarge {
            file_name: file_name.to_string(),
            size,
        });
    }
    Ok(())
}

// =============================================================================
// Form state
// =============================================================================

/// Local editable copy of the settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsForm {
    pub values: SettingsUpdate,
    /// Current image URLs (what the previews show).
    pub previews: WebsiteSettings,
    pending: Vec<(ImageField, FileSelection)>,
}

impl SettingsForm {
    pub fn from_settings(settings: &WebsiteSettings) -> Self {
        Self {
            values: SettingsUpdate::from(settings),
            previews: settings.clone(),
            pending: Vec::new(),
        }
    }

    /// Stage an image for upload. A rejected file leaves the previously
    /// staged file and the preview untouched.
    pub fn stage_image(
        &mut self,
        field: ImageField,
        file: FileSelection,
    ) -> Result<(), SettingsError> {
        validate_image_size(&file.file_name, file.size())?;
        if !file.content_type.starts_with("image/") {
            return Err(SettingsError::NotAnImage {
                file_name: file.file_name,
            });
        }
        self.pending.retain(|(f, _)| *f != field);
        self.pending.push((field, file));
        Ok(())
    }

    pub fn staged(&self, field: ImageField) -> Option<&FileSelection> {
        self.pending.iter().find(|(f, _)| *f == field).map(|(_, s)| s)
    }

    /// Staged uploads in [`ImageField::ALL`] order.
    pub fn pending_uploads(&self) -> Vec<(ImageField, &FileSelection)> {
        ImageField::ALL
            .into_iter()
            .filter_map(|f| self.staged(f).map(|s| (f, s)))
            .collect()
    }

    pub fn has_pending_uploads(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Check text fields before anything is sent.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let v = &self.values;
        if v.school_name.trim().is_empty() {
            return Err(SettingsError::MissingSchoolName);
        }
        if !v.email.trim().is_empty() && !EMAIL_RE.is_match(v.email.trim()) {
            return Err(SettingsError::InvalidEmail);
        }
        if !v.phone.trim().is_empty() && !PHONE_RE.is_match(v.phone.trim()) {
            return Err(SettingsError::InvalidPhone);
        }
        if let Some(year) = v.established_year {
            let max = chrono::Local::now().year();
            if year < MIN_ESTABLISHED_YEAR || i64::from(year) > i64::from(max) {
                return Err(SettingsError::InvalidYear { max });
            }
        }
        Ok(())
    }

    /// Set a text field by its form name. Unknown names are ignored.
    pub fn set_text(&mut self, name: &str, value: String) {
        let v = &mut self.values;
        match name {
            "schoolName" => v.school_name = value,
            "tagline" => v.tagline = value,
            "address" => v.address = value,
            "phone" => v.phone = value,
            "email" => v.email = value,
            "establishedYear" => v.established_year = value.trim().parse().ok(),
            "principalName" => v.principal_name = value,
            "principalMessage" => v.principal_message = value,
            "aboutText" => v.about_text = value,
            _ => tracing::debug!("Ignoring unknown settings field: {}", name),
        }
    }
}
