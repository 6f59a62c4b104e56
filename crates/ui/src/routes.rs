use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CountriesView, HelloView, HomeView, LayoutView, PlayView, StyleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", PlayView)] Play {},
        #[route("/hello", HelloView)] Hello {},
        #[route("/style", StyleView)] Style {},
        #[route("/layout", LayoutView)] LayoutDemo {},
        #[route("/countries", CountriesView)] Countries {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "QuizApp" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Play {}, "Quiz" } }
                li { Link { to: Route::Hello {}, "Hello" } }
                li { Link { to: Route::Style {}, "Style" } }
                li { Link { to: Route::LayoutDemo {}, "Layout" } }
                li { Link { to: Route::Countries {}, "Countries" } }
            }
        }
    }
}
