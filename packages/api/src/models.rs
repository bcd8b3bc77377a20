//! # Wire models for the catalog, enrollment, and profile endpoints
//!
//! These mirror what the backend actually sends: Mongo-style records with a
//! string `_id`, optional fields defaulted rather than erroring, and unknown
//! fields (timestamps and the like) ignored. The `*Draft` types are the
//! request-side counterparts the creation and update forms build up.
//!
//! The identity/role types live in the `session` crate — see
//! [`session::Identity`] — since the session core owns them.

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "Beginner".to_string()
}

/// A course as returned by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructor_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    /// Hours.
    #[serde(default)]
    pub duration: u32,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub lesson_count: u32,
    /// Populated by the detail endpoint only.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Content format of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    #[default]
    Text,
    Video,
}

impl LessonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LessonKind::Text => "text",
            LessonKind::Video => "video",
        }
    }
}

/// A lesson within a course.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lesson {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub lesson_type: LessonKind,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub order: u32,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
}

/// A student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    /// Percent of the course's lessons completed.
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    /// Course summary joined in by the enrollments endpoint.
    #[serde(default)]
    pub course: Option<Course>,
}

impl Enrollment {
    /// Whether the given lesson is marked complete.
    pub fn is_completed(&self, lesson_id: &str) -> bool {
        self.completed_lessons.iter().any(|id| id == lesson_id)
    }
}

/// Extended profile attached to an account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Payload for creating or updating a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub duration: u32,
    pub level: String,
    pub is_published: bool,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            price: 0.0,
            duration: 0,
            level: default_level(),
            is_published: false,
        }
    }
}

/// Payload for creating or updating a lesson.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LessonDraft {
    pub title: String,
    pub content: String,
    pub lesson_type: LessonKind,
    pub video_url: String,
    pub order: u32,
    pub duration: u32,
}

/// Payload for creating or updating a profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub phone: String,
    pub address: String,
}

impl ProfileDraft {
    /// Prefill a draft from an existing profile for editing.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            bio: profile.bio.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_defaults_missing_fields() {
        let course: Course = serde_json::from_str(
            r#"{"_id":"c1","title":"Rust 101","instructor_id":"u1","created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(course.id, "c1");
        assert_eq!(course.level, "Beginner");
        assert_eq!(course.lesson_count, 0);
        assert!(course.lessons.is_empty());
        assert!(!course.is_published);
    }

    #[test]
    fn course_detail_carries_lessons() {
        let course: Course = serde_json::from_str(
            r#"{
                "_id":"c1","title":"Rust 101","instructor_id":"u1","lesson_count":1,
                "lessons":[{"_id":"l1","course_id":"c1","title":"Intro","lesson_type":"video","video_url":"https://v","order":1}]
            }"#,
        )
        .unwrap();
        assert_eq!(course.lessons.len(), 1);
        assert_eq!(course.lessons[0].lesson_type, LessonKind::Video);
        assert_eq!(course.lessons[0].content, "");
    }

    #[test]
    fn lesson_type_defaults_to_text() {
        let lesson: Lesson =
            serde_json::from_str(r#"{"_id":"l1","course_id":"c1","title":"Intro"}"#).unwrap();
        assert_eq!(lesson.lesson_type, LessonKind::Text);
    }

    #[test]
    fn lesson_draft_serializes_lowercase_kind() {
        let draft = LessonDraft {
            title: "Intro".to_string(),
            lesson_type: LessonKind::Video,
            ..LessonDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["lesson_type"], "video");
    }

    #[test]
    fn enrollment_joins_course_and_tracks_completion() {
        let enrollment: Enrollment = serde_json::from_str(
            r#"{
                "_id":"e1","student_id":"u1","course_id":"c1","progress":50.0,
                "completed_lessons":["l1"],
                "course":{"_id":"c1","title":"Rust 101","instructor_id":"u2"}
            }"#,
        )
        .unwrap();
        assert!(enrollment.is_completed("l1"));
        assert!(!enrollment.is_completed("l2"));
        assert_eq!(enrollment.course.as_ref().unwrap().title, "Rust 101");
    }

    #[test]
    fn bare_enrollment_has_no_course() {
        let enrollment: Enrollment =
            serde_json::from_str(r#"{"_id":"e1","student_id":"u1","course_id":"c1"}"#).unwrap();
        assert_eq!(enrollment.course, None);
        assert_eq!(enrollment.progress, 0.0);
    }

    #[test]
    fn profile_draft_round_trips_profile_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"_id":"p1","user_id":"u1","first_name":"Ada","bio":"hi"}"#,
        )
        .unwrap();
        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.bio, "hi");
        assert_eq!(draft.last_name, "");
    }
}
