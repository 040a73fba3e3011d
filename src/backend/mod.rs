//! School backend REST client.
//!
//! Pages never talk HTTP themselves: they go through [`SchoolApi`], which
//! [`HttpBackend`] implements over reqwest and tests replace with in-memory
//! fakes.

mod error;
mod http;

pub use error::BackendError;
pub use http::HttpBackend;

use async_trait::async_trait;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::routine::{ClassRef, RoutineSchedule};
use crate::settings::{FileSelection, ImageField, SettingsUpdate, WebsiteSettings};

pub type SharedApi = Arc<dyn SchoolApi>;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Enrolled class; absent until the student is assigned one.
    #[serde(default)]
    pub class: Option<ClassRef>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TeacherProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Backend operations used by the portal.
#[async_trait]
pub trait SchoolApi: Send + Sync {
    async fn student_profile(&self, student_id: &str) -> Result<StudentProfile, BackendError>;

    async fn teacher_profile(&self, teacher_id: &str) -> Result<TeacherProfile, BackendError>;

    /// All published routines, in server order.
    async fn list_routines(&self) -> Result<Vec<RoutineSchedule>, BackendError>;

    /// Published routine for a class; `None` when the class has none.
    async fn routine_for_class(
        &self,
        class_id: &str,
    ) -> Result<Option<RoutineSchedule>, BackendError>;

    async fn create_routine(
        &self,
        routine: &RoutineSchedule,
    ) -> Result<RoutineSchedule, BackendError>;

    async fn update_routine(
        &self,
        routine_id: &str,
        routine: &RoutineSchedule,
    ) -> Result<RoutineSchedule, BackendError>;

    async fn delete_routine(&self, routine_id: &str) -> Result<(), BackendError>;

    async fn get_settings(&self) -> Result<WebsiteSettings, BackendError>;

    async fn update_settings(
        &self,
        update: &SettingsUpdate,
    ) -> Result<WebsiteSettings, BackendError>;

    async fn upload_image(
        &self,
        field: ImageField,
        file: &FileSelection,
    ) -> Result<WebsiteSettings, BackendError>;
}

/// Responses come either bare or wrapped in `{"data": ...}`.
///
/// A body counts as wrapped only when the `data` key is present, so a bare
/// payload is never mistaken for `{"data": null}` when `T` is an `Option`.
pub(crate) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(t) => t,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(mut body) if body.contains_key("data") => {
                let data = body.remove("data").unwrap_or(Value::Null);
                T::deserialize(data)
                    .map(|data| Envelope::Wrapped { data })
                    .map_err(D::Error::custom)
            }
            other => T::deserialize(other)
                .map(Envelope::Bare)
                .map_err(D::Error::custom),
        }
    }
}
