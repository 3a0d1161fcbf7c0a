//! Terminal front end: submits a job description and resume to a running
//! interviewer server and prints the generated questions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interviewer::client::api::HttpInterviewerApi;
use interviewer::client::notify::TracingNotifier;
use interviewer::client::session::SessionState;
use interviewer::client::Interviewer;

#[derive(Debug, Parser)]
#[command(
    name = "interviewer-cli",
    version,
    about = "Generate interview questions from a job description and resume"
)]
struct Args {
    /// Base URL of the interviewer server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// File containing the job description
    #[arg(long)]
    job_description: PathBuf,

    /// File containing the candidate's resume
    #[arg(long)]
    resume: PathBuf,

    /// Extra rounds of regeneration after the first set
    #[arg(long, default_value_t = 0)]
    regenerate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let job_description = tokio::fs::read_to_string(&args.job_description)
        .await
        .with_context(|| format!("reading {}", args.job_description.display()))?;
    let resume_text = tokio::fs::read_to_string(&args.resume)
        .await
        .with_context(|| format!("reading {}", args.resume.display()))?;

    let client = Interviewer::new(HttpInterviewerApi::new(&args.server), TracingNotifier);
    let mut session = SessionState::new();

    let questions = client
        .submit(&mut session, &job_description, &resume_text)
        .await?;
    print_questions("Generated Questions", &questions);

    for _ in 0..args.regenerate {
        let regeneration = client.regenerate(&mut session).await?;
        print_questions(
            &format!("Regenerated (temperature {:.2})", regeneration.temperature),
            &regeneration.questions,
        );
    }

    Ok(())
}

fn print_questions(heading: &str, questions: &[String]) {
    println!("{heading}");
    for question in questions {
        println!("  {question}");
    }
    println!();
}
