use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_country_sections;

#[component]
pub fn CountriesView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.country_service();
    let resource = use_resource(move || {
        let service = service.clone();
        async move {
            let report = service
                .report()
                .await
                .map_err(|_| ViewError::SourceUnavailable)?;
            Ok::<_, ViewError>(map_country_sections(service.filter(), &report))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Countries" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(sections) => rsx! {
                    for part in sections {
                        section { class: "country-section",
                            h3 { "{part.title}" }
                            ul {
                                for name in part.items {
                                    li { "{name}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => {
                    let message = err.message();
                    rsx! {
                        p { class: "error", "{message}" }
                    }
                }
            }
        }
    }
}
