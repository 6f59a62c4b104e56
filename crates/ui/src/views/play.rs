use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizIntent, QuizVm};

fn apply(mut vm: Signal<QuizVm>, mut error: Signal<Option<ViewError>>, intent: QuizIntent) {
    let result = vm.write().dispatch(intent);
    error.set(result.err());
}

#[component]
pub fn PlayView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| QuizVm::new(ctx.new_quiz()));
    let error = use_signal(|| None::<ViewError>);

    let (view, draft) = {
        let guard = vm.read();
        (guard.view(), guard.answer_draft().to_owned())
    };
    let error_message = error().map(ViewError::message);
    let answer_disabled = !view.can_answer;
    let start_disabled = !view.can_start;
    let question = view.question_text;
    let score = view.score_text;
    let feedback = view.feedback;

    rsx! {
        div { class: "page quiz",
            h2 { "Quiz" }
            p { class: "quiz-question", "{question}" }
            input {
                class: "quiz-answer",
                r#type: "text",
                placeholder: "Enter answer here:",
                value: "{draft}",
                disabled: answer_disabled,
                oninput: move |evt| vm.write().set_answer_draft(evt.value()),
                onkeydown: move |evt| {
                    if matches!(evt.data.key(), Key::Enter) {
                        evt.prevent_default();
                        apply(vm, error, QuizIntent::Submit);
                    }
                },
            }
            p { class: "quiz-score", "{score}" }
            p { class: "quiz-feedback", "{feedback}" }
            match error_message {
                Some(message) => rsx! {
                    p { class: "error", "{message}" }
                },
                None => rsx! {},
            }
            div { class: "quiz-actions",
                button {
                    id: "quiz-submit",
                    disabled: answer_disabled,
                    onclick: move |_| apply(vm, error, QuizIntent::Submit),
                    "Submit"
                }
                button {
                    id: "quiz-start",
                    disabled: start_disabled,
                    onclick: move |_| apply(vm, error, QuizIntent::Start),
                    "Start Quiz"
                }
            }
        }
    }
}
