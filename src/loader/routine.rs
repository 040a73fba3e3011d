//! Routine pages: student and teacher fetch pipelines.
//!
//! Both pipelines are two steps where the second consumes the typed output
//! of the first, so a failed first step can never trigger the second
//! request. A backend failure produces exactly one error notice and a
//! terminal `Unavailable` state; nothing is retried.

use tracing::{debug, warn};

use super::{LoadError, ViewScope};
use crate::backend::{SchoolApi, TeacherProfile};
use crate::notify::Notice;
use crate::routine::{ClassRef, RoutineSchedule};

/// Output of the first student step: a class that can be looked up.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrolledClass {
    pub class_id: String,
    pub class: ClassRef,
}

pub async fn resolve_student_class(
    api: &dyn SchoolApi,
    student_id: &str,
) -> Result<EnrolledClass, LoadError> {
    let profile = api.student_profile(student_id).await?;
    let class = profile.class.ok_or(LoadError::NotEnrolled)?;
    let class_id = class
        .id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .ok_or(LoadError::NotEnrolled)?;
    Ok(EnrolledClass { class_id, class })
}

/// `Ok(None)` when the class has no published routine.
pub async fn fetch_class_routine(
    api: &dyn SchoolApi,
    class: &EnrolledClass,
) -> Result<Option<RoutineSchedule>, LoadError> {
    Ok(api.routine_for_class(&class.class_id).await?)
}

#[derive(Clone, Debug, PartialEq)]
pub enum StudentRoutineView {
    Ready {
        class: EnrolledClass,
        routine: RoutineSchedule,
    },
    NotEnrolled,
    NotPublished {
        class: EnrolledClass,
    },
    Unavailable {
        notice: Notice,
    },
}

/// Run the student pipeline. `None` means the view went away first.
pub async fn load_student_routine(
    api: &dyn SchoolApi,
    student_id: &str,
    scope: &ViewScope,
) -> Option<StudentRoutineView> {
    scope
        .run(async {
            let class = match resolve_student_class(api, student_id).await {
                Ok(class) => class,
                Err(LoadError::NotEnrolled) => return StudentRoutineView::NotEnrolled,
                Err(LoadError::Backend(e)) => {
                    warn!("Student {} profile lookup failed: {}", student_id, e);
                    return StudentRoutineView::Unavailable {
                        notice: e.to_notice(),
                    };
                }
            };
            match fetch_class_routine(api, &class).await {
                Ok(Some(routine)) => StudentRoutineView::Ready { class, routine },
                Ok(None) => {
                    debug!("No routine published for class {}", class.class_id);
                    StudentRoutineView::NotPublished { class }
                }
                Err(e) => {
                    warn!("Routine lookup for class {} failed: {}", class.class_id, e);
                    StudentRoutineView::Unavailable {
                        notice: load_notice(&e),
                    }
                }
            }
        })
        .await
}

fn load_notice(e: &LoadError) -> Notice {
    match e {
        LoadError::Backend(b) => b.to_notice(),
        LoadError::NotEnrolled => Notice::info(e.to_string()),
    }
}

/// Routines shown to a teacher, with one selected at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct TeacherRoutines {
    pub teacher: TeacherProfile,
    routines: Vec<RoutineSchedule>,
    selected: usize,
}

impl TeacherRoutines {
    /// First routine is selected. `None` for an empty list.
    pub fn new(teacher: TeacherProfile, routines: Vec<RoutineSchedule>) -> Option<Self> {
        if routines.is_empty() {
            return None;
        }
        Some(Self {
            teacher,
            routines,
            selected: 0,
        })
    }

    pub fn routines(&self) -> &[RoutineSchedule] {
        &self.routines
    }

    /// Select by index. Out-of-range leaves the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.routines.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &RoutineSchedule {
        &self.routines[self.selected]
    }

    /// Teacher id used to highlight the teacher's own periods.
    pub fn highlight_id(&self) -> Option<&str> {
        Some(self.teacher.id.as_str()).filter(|id| !id.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TeacherRoutineView {
    Ready(TeacherRoutines),
    NotPublished { teacher: TeacherProfile },
    Unavailable { notice: Notice },
}

pub async fn resolve_teacher(
    api: &dyn SchoolApi,
    teacher_id: &str,
) -> Result<TeacherProfile, LoadError> {
    Ok(api.teacher_profile(teacher_id).await?)
}

/// Run the teacher pipeline. Every published routine is listed, not only
/// the ones this teacher appears in.
pub async fn load_teacher_routines(
    api: &dyn SchoolApi,
    teacher_id: &str,
    scope: &ViewScope,
) -> Option<TeacherRoutineView> {
    scope
        .run(async {
            let teacher = match resolve_teacher(api, teacher_id).await {
                Ok(t) => t,
                Err(e) => {
                    warn!("Teacher {} profile lookup failed: {}", teacher_id, e);
                    return TeacherRoutineView::Unavailable {
                        notice: load_notice(&e),
                    };
                }
            };
            match api.list_routines().await {
                Ok(routines) => match TeacherRoutines::new(teacher.clone(), routines) {
                    Some(view) => TeacherRoutineView::Ready(view),
                    None => TeacherRoutineView::NotPublished { teacher },
                },
                Err(e) => {
                    warn!("Routine list failed: {}", e);
                    TeacherRoutineView::Unavailable {
                        notice: e.to_notice(),
                    }
                }
            }
        })
        .await
}
