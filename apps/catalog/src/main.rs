use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    quiz::TimerDisplay, run_quiz_timer, submit_login, submit_registration, AlertSink, AuthClient,
    CatalogPage, HttpCatalogLoader, MarkupContainer, QuizTimer, TextInput,
};
use shared::protocol::{LoginRequest, RegisterRequest};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides the server URL from config and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the catalog and print the rendered cards. Each `--query` is applied as a
    /// successive keystroke on the search field.
    Courses {
        #[arg(long)]
        query: Vec<String>,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        img_url: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Quiz {
        #[arg(long)]
        seconds: Option<u32>,
    },
}

struct StderrAlerts;

impl AlertSink for StderrAlerts {
    fn alert(&mut self, message: &str) {
        eprintln!("ALERT: {message}");
    }
}

struct StdoutTimer;

impl TimerDisplay for StdoutTimer {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = config::load_settings(&cli.config)?;
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }

    match cli.command {
        Command::Courses { query } => {
            let loader = HttpCatalogLoader::with_timeout(
                &settings.server_url,
                Duration::from_secs(settings.request_timeout_secs),
            )?;
            let input = TextInput::default();
            let mut page = CatalogPage::new(MarkupContainer::new(), Some(input.clone()));
            let loaded = page.load(&loader).await;
            if loaded.is_ok() {
                for value in query {
                    input.set_value(value);
                    page.handle_input();
                }
            }
            print!("{}", page.container().to_html());
            loaded.context("failed to load course catalog")?;
        }
        Command::Register {
            name,
            surname,
            email,
            img_url,
            username,
            password,
        } => {
            let client = AuthClient::new(&settings.server_url)?;
            let form = RegisterRequest {
                name,
                surname,
                email,
                img_url,
                username,
                password,
            };
            if let Some(redirect) = submit_registration(&client, &form, &mut StderrAlerts).await {
                println!("redirect: {}", redirect.path());
            }
        }
        Command::Login { email, password } => {
            let mut client = AuthClient::new(&settings.server_url)?;
            let form = LoginRequest { email, password };
            if let Some(redirect) = submit_login(&mut client, &form, &mut StderrAlerts).await {
                println!("redirect: {}", redirect.path());
                if let Some(token) = client.token() {
                    println!("token: {token}");
                }
            }
        }
        Command::Quiz { seconds } => {
            let mut timer = QuizTimer::new(seconds.unwrap_or(settings.quiz_seconds));
            run_quiz_timer(&mut timer, &mut StdoutTimer, &mut StderrAlerts).await;
        }
    }

    Ok(())
}
