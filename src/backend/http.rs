//! reqwest implementation of [`SchoolApi`].

use async_trait::async_trait;
use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::ErrorBody;
use super::{BackendError, Envelope, SchoolApi, StudentProfile, TeacherProfile};
use crate::routine::RoutineSchedule;
use crate::settings::{FileSelection, ImageField, SettingsUpdate, WebsiteSettings};

/// Multipart part name the backend reads uploads from.
const UPLOAD_PART: &str = "image";

/// HTTP client for the school REST backend.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let parsed =
            url::Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("Backend {} {}", method, path);
        self.client.request(method, self.url(path))
    }

    /// Send and decode a JSON body, mapping non-2xx to [`BackendError::Server`].
    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, BackendError> {
        let resp = self.check(req.send().await?).await?;
        let body: Envelope<T> = resp.json().await?;
        Ok(body.into_inner())
    }

    async fn check(&self, resp: Response) -> Result<Response, BackendError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        warn!(
            "Backend error {}: {}",
            status.as_u16(),
            message.as_deref().unwrap_or("<no message>")
        );
        Err(BackendError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl SchoolApi for HttpBackend {
    async fn student_profile(&self, student_id: &str) -> Result<StudentProfile, BackendError> {
        let path = format!("/students/{}", segment(student_id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn teacher_profile(&self, teacher_id: &str) -> Result<TeacherProfile, BackendError> {
        let path = format!("/teachers/{}", segment(teacher_id));
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn list_routines(&self) -> Result<Vec<RoutineSchedule>, BackendError> {
        self.send_json(self.request(Method::GET, "/routines")).await
    }

    async fn routine_for_class(
        &self,
        class_id: &str,
    ) -> Result<Option<RoutineSchedule>, BackendError> {
        let path = format!("/routines/class/{}", segment(class_id));
        match self
            .send_json::<Option<RoutineSchedule>>(self.request(Method::GET, &path))
            .await
        {
            Ok(routine) => Ok(routine),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_routine(
        &self,
        routine: &RoutineSchedule,
    ) -> Result<RoutineSchedule, BackendError> {
        self.send_json(self.request(Method::POST, "/routines").json(routine))
            .await
    }

    async fn update_routine(
        &self,
        routine_id: &str,
        routine: &RoutineSchedule,
    ) -> Result<RoutineSchedule, BackendError> {
        let path = format!("/routines/{}", segment(routine_id));
        self.send_json(self.request(Method::PUT, &path).json(routine))
            .await
    }

    async fn delete_routine(&self, routine_id: &str) -> Result<(), BackendError> {
        let path = format!("/routines/{}", segment(routine_id));
        self.check(self.request(Method::DELETE, &path).send().await?)
            .await?;
        Ok(())
    }

    async fn get_settings(&self) -> Result<WebsiteSettings, BackendError> {
        self.send_json(self.request(Method::GET, "/settings")).await
    }

    async fn update_settings(
        &self,
        update: &SettingsUpdate,
    ) -> Result<WebsiteSettings, BackendError> {
        self.send_json(self.request(Method::PUT, "/settings").json(update))
            .await
    }

    async fn upload_image(
        &self,
        field: ImageField,
        file: &FileSelection,
    ) -> Result<WebsiteSettings, BackendError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let form = multipart::Form::new().part(UPLOAD_PART, part);
        let path = format!("/settings/{}", field.form_name());
        self.send_json(self.request(Method::PUT, &path).multipart(form))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(
            HttpBackend::new("not a url", Duration::from_secs(1)),
            Err(BackendError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpBackend::new("ftp://example.com/api", Duration::from_secs(1)),
            Err(BackendError::InvalidUrl(_))
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:5000/api/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(backend.base_url(), "http://localhost:5000/api");
        assert_eq!(
            backend.url("/routines"),
            "http://localhost:5000/api/routines"
        );
    }

    #[test]
    fn ids_are_path_encoded() {
        assert_eq!(segment("class 8/A"), "class%208%2FA");
    }
}
