/// Label text for the hello demo. One click switches it for good.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Greeting {
    #[default]
    Hello,
    Goodbye,
}

impl Greeting {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Greeting::Hello => "Hello World!",
            Greeting::Goodbye => "GoodBye Cruel World!",
        }
    }

    #[must_use]
    pub fn clicked(self) -> Self {
        Greeting::Goodbye
    }
}

/// Background of the style demo button.
///
/// Starts with the stylesheet look; the first click turns it green and later
/// clicks alternate between red and green.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonTone {
    #[default]
    Stylesheet,
    Green,
    Red,
}

impl ButtonTone {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ButtonTone::Green => ButtonTone::Red,
            ButtonTone::Stylesheet | ButtonTone::Red => ButtonTone::Green,
        }
    }

    #[must_use]
    pub fn inline_style(self) -> &'static str {
        match self {
            ButtonTone::Stylesheet => "",
            ButtonTone::Green => "background-color: #4caf50;",
            ButtonTone::Red => "background-color: red;",
        }
    }
}
