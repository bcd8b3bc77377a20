//! Enrollment and progress endpoints. Enrolling, unenrolling, and progress
//! updates are student operations; the enrollments listing is role-scoped by
//! the server (students see their own, instructors those of their courses).

use serde::{Deserialize, Serialize};

use crate::models::Enrollment;
use crate::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct EnrollRequest<'a> {
    course_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ProgressUpdate<'a> {
    course_id: &'a str,
    lesson_id: &'a str,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct EnrollmentsEnvelope {
    enrollments: Vec<Enrollment>,
}

#[derive(Debug, Deserialize)]
struct EnrollmentEnvelope {
    enrollment: Enrollment,
}

impl ApiClient {
    /// POST `/api/enroll`.
    pub async fn enroll(&self, token: &str, course_id: &str) -> Result<Enrollment, ApiError> {
        let body: EnrollmentEnvelope = self
            .execute(
                self.http()
                    .post(self.url("/api/enroll"))
                    .bearer_auth(token)
                    .json(&EnrollRequest { course_id }),
            )
            .await?;
        Ok(body.enrollment)
    }

    /// DELETE `/api/enroll/{course_id}`.
    pub async fn unenroll(&self, token: &str, course_id: &str) -> Result<(), ApiError> {
        self.execute_unit(
            self.http()
                .delete(self.url(&format!("/api/enroll/{course_id}")))
                .bearer_auth(token),
        )
        .await
    }

    /// GET `/api/enrollments`, with course summaries joined in.
    pub async fn list_enrollments(&self, token: &str) -> Result<Vec<Enrollment>, ApiError> {
        let body: EnrollmentsEnvelope = self
            .execute(
                self.http()
                    .get(self.url("/api/enrollments"))
                    .bearer_auth(token),
            )
            .await?;
        Ok(body.enrollments)
    }

    /// PUT `/api/progress` — mark a lesson complete or incomplete; the
    /// server recomputes the percentage and returns the fresh enrollment.
    pub async fn update_progress(
        &self,
        token: &str,
        course_id: &str,
        lesson_id: &str,
        completed: bool,
    ) -> Result<Enrollment, ApiError> {
        let body: EnrollmentEnvelope = self
            .execute(
                self.http()
                    .put(self.url("/api/progress"))
                    .bearer_auth(token)
                    .json(&ProgressUpdate {
                        course_id,
                        lesson_id,
                        completed,
                    }),
            )
            .await?;
        Ok(body.enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_update_payload_shape() {
        let json = serde_json::to_value(&ProgressUpdate {
            course_id: "c1",
            lesson_id: "l1",
            completed: true,
        })
        .unwrap();
        assert_eq!(json["course_id"], "c1");
        assert_eq!(json["lesson_id"], "l1");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn enrollment_envelope_unwraps() {
        let body: EnrollmentEnvelope = serde_json::from_str(
            r#"{"message":"Enrolled successfully",
                "enrollment":{"_id":"e1","student_id":"u1","course_id":"c1","progress":0}}"#,
        )
        .unwrap();
        assert_eq!(body.enrollment.course_id, "c1");
    }
}
