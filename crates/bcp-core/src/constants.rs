//! Application constants and configuration defaults
//!
//! Centralized location for file names, environment variables, and label sets

/// Data file configuration
pub mod data {
    /// Default data file name, resolved against the working directory
    pub const DEFAULT_FILE_NAME: &str = "bcp_data.json";

    /// Environment variable that overrides the data file location
    pub const FILE_ENV_VAR: &str = "BCP_DATA_FILE";

    /// Indent width used when writing the document
    pub const JSON_INDENT: &[u8] = b"    ";
}

/// Directory layout under the user's home
pub mod dirs {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".bcp";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Log file name
    pub const LOG_FILE_NAME: &str = "bcp.log";
}

/// Rating labels accepted on load
pub mod labels {
    /// Arabic labels written by earlier versions of the register
    pub const AR_LOW: &[&str] = &["منخفض", "ضعيف"];
    pub const AR_MEDIUM: &str = "متوسط";
    pub const AR_HIGH: &str = "عالي";
}
