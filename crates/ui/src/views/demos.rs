//! Small layout and styling exercises.

use dioxus::prelude::*;

use crate::vm::{ButtonTone, Greeting};

#[component]
pub fn HelloView() -> Element {
    let mut greeting = use_signal(Greeting::default);
    let text = greeting().text();

    rsx! {
        div { class: "page",
            h2 { "Hello" }
            label { class: "greeting", "{text}" }
            button {
                onclick: move |_| {
                    let next = greeting().clicked();
                    greeting.set(next);
                },
                "Click me!"
            }
        }
    }
}

#[component]
pub fn StyleView() -> Element {
    let mut tone = use_signal(ButtonTone::default);
    let style = tone().inline_style();

    rsx! {
        div { class: "page",
            h2 { "Style" }
            label { "Hello World" }
            button {
                class: "styled-button",
                style: "{style}",
                onclick: move |_| {
                    let next = tone().toggled();
                    tone.set(next);
                },
                "Click Me"
            }
        }
    }
}

#[component]
pub fn LayoutView() -> Element {
    rsx! {
        div {
            class: "page",
            style: "padding: 20px; gap: 15px;",
            h2 { "Layout" }
            label { "This is a good layout example:" }
            div { style: "display: flex; gap: 10px;",
                button { "Click Me" }
            }
        }
    }
}
