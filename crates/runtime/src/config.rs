pub const PROGRAM_NAME: &str = "ledgerbench";

/// Environment variable consulted for the log level (`error`..`trace`).
pub const PROGRAM_LOG_LEVEL: &str = "LEDGERBENCH_LOG_LEVEL";
