use tracing::info;
use tracing_subscriber::EnvFilter;

use netsentry::{
    ArtifactPlan, DataIngestion, IngestionConfig, IngestionError, MongoSource, SourceCredentials,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("data ingestion failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), IngestionError> {
    // Credentials are resolved before anything else so a misconfigured
    // environment fails fast, ahead of any network attempt.
    let credentials = SourceCredentials::from_env()?;

    let plan = ArtifactPlan::for_current_run();
    let config = IngestionConfig::new(&plan);
    let source = MongoSource::new(
        &credentials,
        config.database_name.as_str(),
        config.collection_name.as_str(),
    );

    info!(
        pipeline = plan.pipeline_name,
        artifact_dir = %plan.artifact_dir.display(),
        "starting data ingestion"
    );
    let mut ingestion = DataIngestion::new(config, &source);
    let artifact = ingestion.run()?;

    println!("train: {}", artifact.train_file_path.display());
    println!("test: {}", artifact.test_file_path.display());
    Ok(())
}
