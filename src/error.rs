use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Day offset {offset} is out of range (dates only go back to year 0)")]
    OffsetOutOfRange { offset: u64 },

    #[error("{0}")]
    Job(#[from] JobError),
}

#[derive(Debug, Error)]
pub(crate) enum JobError {
    #[error("No job command given (pass one after \"--\" or set job_command in the config)")]
    EmptyCommand,

    #[error("Failed to start job \"{command}\": {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for job: {0}")]
    Wait(std::io::Error),
}
