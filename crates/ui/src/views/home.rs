use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.question_bank();
    let loaded = bank.len();
    let per_game = ctx.quiz_settings().questions_per_game();
    let load_failure = bank.load_failure();

    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "Questions loaded: {loaded}" }
            p { "Questions per game: {per_game}" }
            match load_failure {
                Some(message) => rsx! {
                    p { class: "error", "{message}" }
                },
                None => rsx! {},
            }
            Link { to: Route::Play {}, "Start a quiz" }
        }
    }
}
