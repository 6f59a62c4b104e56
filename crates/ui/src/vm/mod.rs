mod country_vm;
mod demo_vm;
mod quiz_vm;

pub use country_vm::{CountrySectionVm, map_country_sections};
pub use demo_vm::{ButtonTone, Greeting};
pub use quiz_vm::{QuizIntent, QuizVm};
