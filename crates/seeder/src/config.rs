use clap::Parser;

/// Seed the assessment question table with the bundled questions.
#[derive(Debug, Clone, Parser)]
#[command(name = "clario-seeder", version, long_about = None)]
pub struct SeedArgs {
    /// Target table (partition key `question_id`)
    #[arg(long, env = "QUESTION_TABLE", default_value = "Question_table")]
    pub table: String,

    /// AWS region of the table
    #[arg(long, env = "AWS_REGION", default_value = "eu-north-1")]
    pub region: String,

    /// Convert and log every record without writing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
