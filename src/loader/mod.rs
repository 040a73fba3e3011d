//! Data loading for pages: typed multi-step fetch pipelines over
//! [`SchoolApi`](crate::backend::SchoolApi), each run inside a [`ViewScope`].

pub mod routine;
pub mod scope;
pub mod settings;

pub use routine::{
    fetch_class_routine, load_student_routine, load_teacher_routines, resolve_student_class,
    resolve_teacher, EnrolledClass, StudentRoutineView, TeacherRoutineView, TeacherRoutines,
};
pub use scope::ViewScope;
pub use settings::{load_branding, load_settings_form, submit_settings, SubmitError};

use crate::backend::BackendError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("student is not enrolled in a class")]
    NotEnrolled,
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory [`SchoolApi`] that records every call.

    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::backend::{BackendError, SchoolApi, StudentProfile, TeacherProfile};
    use crate::routine::RoutineSchedule;
    use crate::settings::{FileSelection, ImageField, SettingsUpdate, WebsiteSettings};

    pub struct FakeApi {
        pub student: Result<StudentProfile, BackendError>,
        pub teacher: Result<TeacherProfile, BackendError>,
        pub routines: Result<Vec<RoutineSchedule>, BackendError>,
        pub by_class: Result<Option<RoutineSchedule>, BackendError>,
        pub settings: Result<WebsiteSettings, BackendError>,
        /// Call name that should fail with a server error.
        pub fail_on: Option<String>,
        pub calls: Mutex<Vec<String>>,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                student: Ok(StudentProfile::default()),
                teacher: Ok(TeacherProfile::default()),
                routines: Ok(Vec::new()),
                by_class: Ok(None),
                settings: Ok(WebsiteSettings::default()),
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    pub fn server_error(status: u16, message: &str) -> BackendError {
        BackendError::Server {
            status,
            message: Some(message.to_string()),
        }
    }

    impl FakeApi {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), BackendError> {
            let failing = self.fail_on.as_deref() == Some(call.as_str());
            self.calls.lock().unwrap().push(call.clone());
            if failing {
                return Err(server_error(500, &format!("{} rejected", call)));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SchoolApi for FakeApi {
        async fn student_profile(&self, id: &str) -> Result<StudentProfile, BackendError> {
            self.record(format!("student:{}", id))?;
            self.student.clone()
        }

        async fn teacher_profile(&self, id: &str) -> Result<TeacherProfile, BackendError> {
            self.record(format!("teacher:{}", id))?;
            self.teacher.clone()
        }

        async fn list_routines(&self) -> Result<Vec<RoutineSchedule>, BackendError> {
            self.record("routines".to_string())?;
            self.routines.clone()
        }

        async fn routine_for_class(
            &self,
            class_id: &str,
        ) -> Result<Option<RoutineSchedule>, BackendError> {
            self.record(format!("class:{}", class_id))?;
            self.by_class.clone()
        }

        async fn create_routine(
            &self,
            routine: &RoutineSchedule,
        ) -> Result<RoutineSchedule, BackendError> {
            self.record("create".to_string())?;
            Ok(routine.clone())
        }

        async fn update_routine(
            &self,
            id: &str,
            routine: &RoutineSchedule,
        ) -> Result<RoutineSchedule, BackendError> {
            self.record(format!("update:{}", id))?;
            Ok(routine.clone())
        }

        async fn delete_routine(&self, id: &str) -> Result<(), BackendError> {
            self.record(format!("delete:{}", id))
        }

        async fn get_settings(&self) -> Result<WebsiteSettings, BackendError> {
            self.record("settings".to_string())?;
            self.settings.clone()
        }

        async fn update_settings(
            &self,
            update: &SettingsUpdate,
        ) -> Result<WebsiteSettings, BackendError> {
            self.record("settings:text".to_string())?;
            let mut current = self.settings.clone().unwrap_or_default();
            current.school_name = update.school_name.clone();
            Ok(current)
        }

        async fn upload_image(
            &self,
            field: ImageField,
            file: &FileSelection,
        ) -> Result<WebsiteSettings, BackendError> {
            self.record(format!("settings:{}", field.form_name()))?;
            let mut current = self.settings.clone().unwrap_or_default();
            let url = Some(format!("https://cdn.example/{}", file.file_name));
            match field {
                ImageField::Logo => current.logo = url,
                ImageField::Banner => current.banner = url,
                ImageField::PrincipalImage => current.principal_image = url,
                ImageField::ChairmanImage => current.chairman_image = url,
            }
            Ok(current)
        }
    }
}
