//! Course and lesson endpoints. Creation, update, and deletion are
//! instructor/admin operations — the backend enforces ownership, the client
//! just carries the token.

use serde::Deserialize;

use crate::models::{Course, CourseDraft, Lesson, LessonDraft};
use crate::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct CoursesEnvelope {
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct CourseEnvelope {
    course: Course,
}

#[derive(Debug, Deserialize)]
struct LessonsEnvelope {
    lessons: Vec<Lesson>,
}

#[derive(Debug, Deserialize)]
struct LessonEnvelope {
    lesson: Lesson,
}

impl ApiClient {
    /// GET `/api/courses` — every course, with `lesson_count` filled in.
    pub async fn list_courses(&self, token: &str) -> Result<Vec<Course>, ApiError> {
        let body: CoursesEnvelope = self
            .execute(self.http().get(self.url("/api/courses")).bearer_auth(token))
            .await?;
        Ok(body.courses)
    }

    /// GET `/api/courses/{id}` — one course with its lessons populated.
    pub async fn course(&self, token: &str, course_id: &str) -> Result<Course, ApiError> {
        let body: CourseEnvelope = self
            .execute(
                self.http()
                    .get(self.url(&format!("/api/courses/{course_id}")))
                    .bearer_auth(token),
            )
            .await?;
        Ok(body.course)
    }

    /// POST `/api/courses`.
    pub async fn create_course(
        &self,
        token: &str,
        draft: &CourseDraft,
    ) -> Result<Course, ApiError> {
        let body: CourseEnvelope = self
            .execute(
                self.http()
                    .post(self.url("/api/courses"))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        Ok(body.course)
    }

    /// PUT `/api/courses/{id}`.
    pub async fn update_course(
        &self,
        token: &str,
        course_id: &str,
        draft: &CourseDraft,
    ) -> Result<Course, ApiError> {
        let body: CourseEnvelope = self
            .execute(
                self.http()
                    .put(self.url(&format!("/api/courses/{course_id}")))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        Ok(body.course)
    }

    /// DELETE `/api/courses/{id}` — the course's lessons go with it.
    pub async fn delete_course(&self, token: &str, course_id: &str) -> Result<(), ApiError> {
        self.execute_unit(
            self.http()
                .delete(self.url(&format!("/api/courses/{course_id}")))
                .bearer_auth(token),
        )
        .await
    }

    /// GET `/api/courses/{id}/lessons`, ordered by `order`.
    pub async fn list_lessons(&self, token: &str, course_id: &str) -> Result<Vec<Lesson>, ApiError> {
        let body: LessonsEnvelope = self
            .execute(
                self.http()
                    .get(self.url(&format!("/api/courses/{course_id}/lessons")))
                    .bearer_auth(token),
            )
            .await?;
        Ok(body.lessons)
    }

    /// POST `/api/courses/{id}/lessons`.
    pub async fn create_lesson(
        &self,
        token: &str,
        course_id: &str,
        draft: &LessonDraft,
    ) -> Result<Lesson, ApiError> {
        let body: LessonEnvelope = self
            .execute(
                self.http()
                    .post(self.url(&format!("/api/courses/{course_id}/lessons")))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        Ok(body.lesson)
    }

    /// PUT `/api/lessons/{id}`.
    pub async fn update_lesson(
        &self,
        token: &str,
        lesson_id: &str,
        draft: &LessonDraft,
    ) -> Result<Lesson, ApiError> {
        let body: LessonEnvelope = self
            .execute(
                self.http()
                    .put(self.url(&format!("/api/lessons/{lesson_id}")))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        Ok(body.lesson)
    }

    /// DELETE `/api/lessons/{id}`.
    pub async fn delete_lesson(&self, token: &str, lesson_id: &str) -> Result<(), ApiError> {
        self.execute_unit(
            self.http()
                .delete(self.url(&format!("/api/lessons/{lesson_id}")))
                .bearer_auth(token),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courses_envelope_unwraps_list() {
        let body: CoursesEnvelope = serde_json::from_str(
            r#"{"courses":[{"_id":"c1","title":"Rust 101","instructor_id":"u1","lesson_count":3}]}"#,
        )
        .unwrap();
        assert_eq!(body.courses.len(), 1);
        assert_eq!(body.courses[0].lesson_count, 3);
    }

    #[test]
    fn lessons_envelope_unwraps_list() {
        let body: LessonsEnvelope = serde_json::from_str(
            r#"{"lessons":[{"_id":"l1","course_id":"c1","title":"Intro","order":1}]}"#,
        )
        .unwrap();
        assert_eq!(body.lessons[0].order, 1);
    }
}
