use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::LevelFilter;
use quiz_core::model::QuizSettings;
use quiz_core::{Clock, CountryFilter};
use services::{CountryService, QuestionBank, QuizService};
use storage::Storage;
use ui::{App, UiApp, build_app_context};

mod cli;
mod terminal;

use cli::{Cli, Command, CountriesArgs, QuizArgs};

struct DesktopApp {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
    clock: Clock,
    country_service: Arc<CountryService>,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn country_service(&self) -> Arc<CountryService> {
        Arc::clone(&self.country_service)
    }
}

fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(filter)
        .target(env_logger::Target::Stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let settings = QuizSettings::new(cli.questions_per_game)?;
    let storage = Storage::files(&cli.questions, &cli.countries);
    let clock = Clock::system();

    match cli.command() {
        Command::Ui => {
            let bank = QuestionBank::load(storage.questions.as_ref()).await;
            let country_service = CountryService::new(storage.names, CountryFilter::default());
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                bank: Arc::new(bank),
                settings,
                clock,
                country_service: Arc::new(country_service),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("QuizApp")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Quiz(args) => run_quiz(&storage, settings, clock, &args).await,
        Command::Countries(args) => run_countries(storage, &args).await,
    }
}

async fn run_quiz(
    storage: &Storage,
    settings: QuizSettings,
    clock: Clock,
    args: &QuizArgs,
) -> Result<()> {
    let bank = QuestionBank::load(storage.questions.as_ref()).await;
    let mut service = QuizService::new(Arc::new(bank), settings, clock);
    if let Some(seed) = args.seed {
        service = service.with_seed(seed);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    terminal::play_round(&mut service, stdin.lock(), &mut stdout, &mut stderr, args.json)?;
    stdout.flush()?;
    Ok(())
}

async fn run_countries(storage: Storage, args: &CountriesArgs) -> Result<()> {
    let filter = CountryFilter::new(args.initials.iter().copied(), args.vowels)?;
    let service = CountryService::new(storage.names, filter);
    let report = service
        .report()
        .await
        .context("could not read the country list")?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &report).context("serialize country report")?;
        writeln!(stdout)?;
    } else {
        terminal::write_country_report(service.filter(), &report, &mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(err) = run(cli).await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
