use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clario_core::question::{validate_question_set, Question};
use clario_seeder::config::SeedArgs;
use clario_seeder::{data, run_seed, DryRunStore, DynamoStore, QuestionStore};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clario_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = SeedArgs::parse();

    let questions = match data::science_questions() {
        Ok(questions) => questions,
        Err(err) => {
            tracing::error!(error = %err, "Bundled question data is not valid JSON");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = validate_question_set(&questions) {
        tracing::error!(error = %err, "Bundled question data failed integrity checks");
        return ExitCode::FAILURE;
    }
    tracing::info!(count = questions.len(), "Loaded Science questions");

    if args.dry_run {
        tracing::info!(table = %args.table, "Dry run: nothing will be written");
        return seed(&DryRunStore::new(&args.table), &questions).await;
    }

    tracing::info!(table = %args.table, region = %args.region, "Connecting to DynamoDB");
    let store = DynamoStore::connect(&args.table, &args.region).await;
    seed(&store, &questions).await
}

async fn seed<S: QuestionStore>(store: &S, questions: &[Question]) -> ExitCode {
    match run_seed(store, questions).await {
        Ok(report) if report.is_complete() => ExitCode::SUCCESS,
        Ok(report) => {
            tracing::warn!(
                failed = report.failed(),
                total = report.total,
                "Some questions were not inserted",
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %err, "Cannot access the question table");
            ExitCode::FAILURE
        }
    }
}
