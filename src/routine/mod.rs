//! Weekly class routine: wire model and the 7-row table built from it.
//!
//! The academic week starts on Saturday. Day names coming from the backend
//! are matched against [`Weekday::as_str`] exactly, without any case or
//! whitespace normalization.

use serde::{Deserialize, Serialize};

/// Placeholder shown for a day without periods.
pub const NO_CLASSES_LABEL: &str = "No classes";
pub const SUBJECT_FALLBACK: &str = "Subject TBA";
pub const TEACHER_FALLBACK: &str = "Teacher TBA";

/// Days of the academic week, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Canonical week order (Saturday first).
    pub const WEEK: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassRef {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub class_name: String,
    #[serde(default)]
    pub section: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SubjectRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TeacherRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub period_number: u32,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub subject: Option<SubjectRef>,
    #[serde(default)]
    pub teacher: Option<TeacherRef>,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    pub day: String,
    #[serde(default)]
    pub periods: Vec<Period>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineSchedule {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub class: ClassRef,
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,
}

impl RoutineSchedule {
    /// First schedule entry whose name is exactly `day`.
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.schedule.iter().find(|d| d.day == day.as_str())
    }

    /// "Class 8 - A" style title; the section is dropped when blank.
    pub fn title(&self) -> String {
        let section = self.class.section.trim();
        if section.is_empty() {
            self.class.class_name.clone()
        } else {
            format!("{} - {}", self.class.class_name, section)
        }
    }
}

// =============================================================================
// Table view model
// =============================================================================

/// One rendered period.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodCard {
    pub period_number: u32,
    pub time_range: String,
    pub subject: String,
    pub teacher: String,
    /// `None` means the room line is left out entirely.
    pub room: Option<String>,
    pub highlighted: bool,
}

impl PeriodCard {
    fn from_period(period: &Period, highlight_teacher_id: Option<&str>) -> Self {
        let highlighted = match (highlight_teacher_id, &period.teacher) {
            (Some(wanted), Some(teacher)) => !wanted.is_empty() && teacher.id == wanted,
            _ => false,
        };

        Self {
            period_number: period.period_number,
            time_range: format!("{}–{}", period.start_time, period.end_time),
            subject: period
                .subject
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| SUBJECT_FALLBACK.to_string()),
            teacher: period
                .teacher
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| TEACHER_FALLBACK.to_string()),
            room: period
                .room
                .as_ref()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            highlighted,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DaySlot {
    NoClasses,
    Periods(Vec<PeriodCard>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayRow {
    pub day: Weekday,
    pub slot: DaySlot,
}

/// Seven rows, Saturday through Friday.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekTable {
    pub rows: Vec<DayRow>,
}

impl WeekTable {
    /// Lay out `routine` as a week. Periods keep the order the backend sent.
    pub fn build(routine: &RoutineSchedule, highlight_teacher_id: Option<&str>) -> Self {
        let rows = Weekday::WEEK
            .iter()
            .map(|&day| {
                let slot = match routine.day(day) {
                    Some(d) if !d.periods.is_empty() => DaySlot::Periods(
                        d.periods
                            .iter()
                            .map(|p| PeriodCard::from_period(p, highlight_teacher_id))
                            .collect(),
                    ),
                    _ => DaySlot::NoClasses,
                };
                DayRow { day, slot }
            })
            .collect();

        Self { rows }
    }

    pub fn row(&self, day: Weekday) -> Option<&DayRow> {
        self.rows.iter().find(|r| r.day == day)
    }

    pub fn highlighted_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| match &r.slot {
                DaySlot::Periods(cards) => cards.iter().filter(|c| c.highlighted).count(),
                DaySlot::NoClasses => 0,
            })
            .sum()
    }
}
