/// Constants naming the training pipeline and its artifact root.
pub mod pipeline {
    /// Pipeline name recorded in run plans and logs.
    pub const PIPELINE_NAME: &str = "NetworkSecurity";
    /// Root directory under which every run's artifacts are stored.
    pub const ARTIFACT_DIR: &str = "Artifacts";
    /// `chrono` format string for run-scoped directory timestamps.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
}

/// Constants used by the data-ingestion layout and split policy.
pub mod ingestion {
    /// Source database name.
    pub const DATABASE_NAME: &str = "network_security";
    /// Source collection name.
    pub const COLLECTION_NAME: &str = "phishing_data";
    /// Ingestion directory name inside the run's artifact directory.
    pub const DIR_NAME: &str = "data_ingestion";
    /// Feature-store directory name inside the ingestion directory.
    pub const FEATURE_STORE_DIR: &str = "feature_store";
    /// Filename for the raw feature-store snapshot.
    pub const RAW_FILE_NAME: &str = "phishingData.csv";
    /// Directory name for the split train/test files.
    pub const INGESTED_DIR: &str = "ingested";
    /// Filename for the training partition.
    pub const TRAIN_FILE_NAME: &str = "train.csv";
    /// Filename for the test partition.
    pub const TEST_FILE_NAME: &str = "test.csv";
    /// Fraction of rows allocated to the test partition.
    pub const TRAIN_TEST_SPLIT_RATIO: f32 = 0.2;
    /// RNG seed that makes the train/test split reproducible.
    pub const SPLIT_SEED: u64 = 42;
    /// Store-internal identifier field stripped from exported tables.
    pub const ID_FIELD: &str = "_id";
    /// Literal string sentinel normalized to a missing value.
    ///
    /// Intentionally narrow: other spellings (empty string, `NaN`, `null`)
    /// pass through untouched.
    pub const MISSING_SENTINEL: &str = "na";
}

/// Environment variable names for source credentials.
pub mod env {
    /// MongoDB username.
    pub const DB_USERNAME: &str = "DB_USERNAME";
    /// MongoDB password.
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    /// MongoDB cluster host.
    pub const DB_HOST: &str = "DB_HOST";
    /// Application database name used in the connection URI.
    pub const DB_NAME: &str = "DB_NAME";
}
