//! The views in this module are mapped to the routes in `main.rs`.

mod shell;
pub use shell::Shell;

mod guard;
pub use guard::Protected;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod courses;
pub use courses::Courses;

mod course_detail;
pub use course_detail::CourseDetail;

mod lesson_viewer;
pub use lesson_viewer::LessonViewer;

mod create_course;
pub use create_course::CreateCourse;

mod create_lesson;
pub use create_lesson::CreateLesson;

mod profile;
pub use profile::Profile;

/// Browser confirmation dialog; answers yes on non-web targets so handlers
/// stay testable there.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
