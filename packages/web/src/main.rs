use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    CourseDetail, Courses, CreateCourse, CreateLesson, Dashboard, LessonViewer, Login, Profile,
    Register, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/home")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/courses")]
        Courses {},
        #[route("/courses/create")]
        CreateCourse {},
        #[route("/courses/:course_id")]
        CourseDetail { course_id: String },
        #[route("/courses/:course_id/lessons/create")]
        CreateLesson { course_id: String },
        #[route("/lessons/:lesson_id")]
        LessonViewer { lesson_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
