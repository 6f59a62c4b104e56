use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quizapp", version, about = "Quiz runner and country filter exercises")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Question file, one `question|answer` pair per line
    #[arg(
        long,
        global = true,
        env = "QUIZ_QUESTIONS_FILE",
        default_value = "resources/quiz.txt"
    )]
    pub questions: PathBuf,

    /// Country file, one name per line
    #[arg(
        long,
        global = true,
        env = "QUIZ_COUNTRIES_FILE",
        default_value = "resources/countries.txt"
    )]
    pub countries: PathBuf,

    #[arg(long, global = true, default_value_t = 10)]
    pub questions_per_game: u32,

    #[arg(long, short, global = true, env = "QUIZ_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop window (default)
    Ui,
    /// Play the quiz in the terminal
    Quiz(QuizArgs),
    /// Print both country projections
    Countries(CountriesArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct QuizArgs {
    /// Seed for a reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CountriesArgs {
    /// Allowed initial letters
    #[arg(long, value_delimiter = ',', default_values_t = ['A', 'T'])]
    pub initials: Vec<char>,

    /// Exact number of vowels for part B
    #[arg(long, default_value_t = 2)]
    pub vowels: usize,

    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ui() {
        let cli = Cli::try_parse_from(["quizapp"]).unwrap();
        assert_eq!(cli.command(), Command::Ui);
        assert_eq!(cli.questions_per_game, 10);
    }

    #[test]
    fn parses_quiz_flags() {
        let cli = Cli::try_parse_from(["quizapp", "quiz", "--seed", "7", "--json"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Quiz(QuizArgs {
                seed: Some(7),
                json: true
            })
        );
    }

    #[test]
    fn parses_country_initials_list() {
        let cli =
            Cli::try_parse_from(["quizapp", "countries", "--initials", "b,c", "--vowels", "3"])
                .unwrap();
        let Command::Countries(args) = cli.command() else {
            panic!("expected countries command");
        };
        assert_eq!(args.initials, vec!['b', 'c']);
        assert_eq!(args.vowels, 3);
        assert!(!args.json);
    }

    #[test]
    fn global_paths_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["quizapp", "quiz", "--questions", "other.txt"]).unwrap();
        assert_eq!(cli.questions, PathBuf::from("other.txt"));
    }
}
