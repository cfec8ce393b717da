use serde::{Deserialize, Serialize};
use std::fmt;

// Type aliases for clarity
pub type Day = String;
pub type TimeLabel = String;
pub type Room = String;

pub const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const WORKING_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
pub const DEFAULT_TIMES: [&str; 5] = [
    "09:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "14:00-15:00",
    "15:00-16:00",
];
pub const DEFAULT_SUBJECTS: [(&str, &str); 7] = [
    ("Data Structures", "Dr. Jane Smith"),
    ("Algorithms", "Dr. Jane Smith"),
    ("Database Systems", "Prof. Robert Wilson"),
    ("Operating Systems", "Dr. Emily Johnson"),
    ("Computer Networks", "Dr. Michael Chen"),
    ("AI Fundamentals", "Dr. Sarah Lee"),
    ("Software Engineering", "Dr. Alan Brown"),
];
pub const DEFAULT_ROOMS: [&str; 5] = ["CS-101", "CS-203", "Lab-1", "Lab-2", "Seminar Hall"];

/// A subject together with the faculty member teaching it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectFacultyPair {
    pub subject_name: String,
    pub faculty_name: String,
}

impl SubjectFacultyPair {
    pub fn new(subject_name: impl Into<String>, faculty_name: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            faculty_name: faculty_name.into(),
        }
    }
}

impl fmt::Display for SubjectFacultyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.subject_name, self.faculty_name)
    }
}

/// One filled cell of the timetable grid. `(day, time)` is unique per schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day: Day,
    pub time: TimeLabel,
    pub subject_name: String,
    pub faculty_name: String,
    pub room: Room,
}

/// Number of slots taught by one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyLoad {
    pub faculty: String,
    pub slots: usize,
}

/// Distinct counts over a generated schedule, plus the per-faculty load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_slots: usize,
    pub subjects: usize,
    pub faculty: usize,
    pub rooms: usize,
    /// Busiest first; ties keep the order in which faculty first appear.
    pub faculty_load: Vec<FacultyLoad>,
}

/// Subject pool as sent by a client: explicit pairs or a `Subject :: Faculty` text block.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SubjectInput {
    Pairs(Vec<SubjectFacultyPair>),
    Text(String),
}

/// Room pool as sent by a client: a list or one room per line.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RoomInput {
    List(Vec<Room>),
    Text(String),
}

/// Input for one generation. Omitted fields take the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub days: Option<Vec<Day>>,
    pub times: Option<Vec<TimeLabel>>,
    pub subjects: Option<SubjectInput>,
    pub rooms: Option<RoomInput>,
    pub classes_per_day: Option<usize>,
    pub room_count: Option<usize>,
    pub seed: Option<u64>,
}

/// The generated timetable plus the axes it was built on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub days: Vec<Day>,
    pub times: Vec<TimeLabel>,
    pub entries: Vec<ScheduleEntry>,
    pub summary: ScheduleSummary,
    pub seed: u64,
}

/// Built-in pools used when a request leaves a field out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    pub days: Vec<Day>,
    pub working_days: Vec<Day>,
    pub times: Vec<TimeLabel>,
    pub subjects: Vec<SubjectFacultyPair>,
    pub rooms: Vec<Room>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            working_days: WORKING_DAYS.iter().map(|d| d.to_string()).collect(),
            times: DEFAULT_TIMES.iter().map(|t| t.to_string()).collect(),
            subjects: DEFAULT_SUBJECTS
                .iter()
                .map(|(s, f)| SubjectFacultyPair::new(*s, *f))
                .collect(),
            rooms: DEFAULT_ROOMS.iter().map(|r| r.to_string()).collect(),
        }
    }
}
