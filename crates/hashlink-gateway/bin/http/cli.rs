use clap::{Parser, ValueEnum};
use hashlink_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "HASHLINK_LISTEN_ADDR";
pub const URL_SCHEME_ENV: &str = "HASHLINK_URL_SCHEME";
pub const HASH_SALT_ENV: &str = "HASHLINK_HASH_SALT";
pub const HASH_MIN_LENGTH_ENV: &str = "HASHLINK_HASH_MIN_LENGTH";
pub const DB_PATH_ENV: &str = "HASHLINK_DB_PATH";
pub const DB_BUCKET_ENV: &str = "HASHLINK_DB_BUCKET";
pub const STORAGE_BACKEND_ENV: &str = "HASHLINK_STORAGE_BACKEND";
pub const LOG_FORMAT_ENV: &str = "HASHLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_HASH_SALT: &str = "tFZ2cQ7U8OQlSWOyZIoFdRusvkFvJh3A";
pub const DEFAULT_HASH_MIN_LENGTH: usize = 4;
pub const DEFAULT_DB_PATH: &str = "hashlink.db";
pub const DEFAULT_DB_BUCKET: &str = "hashlink";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    #[value(name = "http")]
    Http,
    #[value(name = "https")]
    Https,
}

impl Display for SchemeArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeArg::Http => write!(f, "http"),
            SchemeArg::Https => write!(f, "https"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "file")]
    File,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::File => write!(f, "file"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashlink", about = "Deterministic URL shortener")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Scheme of the short URLs handed back to clients.
    #[arg(long, env = URL_SCHEME_ENV, value_enum, default_value_t = SchemeArg::Http)]
    pub scheme: SchemeArg,

    #[arg(long, env = HASH_SALT_ENV, default_value = DEFAULT_HASH_SALT)]
    pub salt: String,

    /// Shortest code the encoder will emit.
    #[arg(long, env = HASH_MIN_LENGTH_ENV, default_value_t = DEFAULT_HASH_MIN_LENGTH)]
    pub min_length: usize,

    #[arg(long, env = DB_PATH_ENV, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long, env = DB_BUCKET_ENV, default_value = DEFAULT_DB_BUCKET)]
    pub db_bucket: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::File
    )]
    pub storage: StorageBackendArg,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        CLI::command().debug_assert();
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = CLI::try_parse_from([
            "hashlink",
            "--listen-addr",
            "0.0.0.0:9000",
            "--scheme",
            "https",
            "--min-length",
            "8",
            "--storage",
            "in-memory",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(cli.scheme, SchemeArg::Https);
        assert_eq!(cli.min_length, 8);
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert!(CLI::try_parse_from(["hashlink", "--scheme", "ftp"]).is_err());
    }

    #[test]
    fn malformed_listen_addr_is_rejected() {
        assert!(CLI::try_parse_from(["hashlink", "--listen-addr", "localhost"]).is_err());
    }
}
