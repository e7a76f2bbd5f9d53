//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::presenter::YearFormat;

/// Where the dataset lives and how it is delimited
#[derive(Debug, Clone, Args)]
pub struct DatasetArgs {
    /// Path to the awards dataset (delimited text with a header row)
    #[arg(long, env = "AWARDS_DATA_FILE", default_value = "data/movielist.csv")]
    pub data_file: PathBuf,

    /// Field delimiter of the dataset
    #[arg(long, env = "AWARDS_CSV_DELIMITER", default_value_t = ';')]
    pub delimiter: char,
}

impl DatasetArgs {
    /// The delimiter as the byte the parser works with
    pub fn delimiter_byte(&self) -> data_loader::Result<u8> {
        data_loader::parse_delimiter(self.delimiter)
    }
}

/// Golden Raspberry producer-interval HTTP service
#[derive(Debug, Clone, Parser)]
#[command(name = "awards-server")]
#[command(about = "Serves the shortest and longest gaps between a producer's wins", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Address to listen on
    #[arg(long, env = "AWARDS_BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Render years as JSON numbers or 4-digit strings
    #[arg(long, env = "AWARDS_YEAR_FORMAT", value_enum, default_value_t = YearFormat::Number)]
    pub year_format: YearFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["awards-server"]).unwrap();
        assert_eq!(config.dataset.data_file, PathBuf::from("data/movielist.csv"));
        assert_eq!(config.dataset.delimiter_byte().unwrap(), b';');
        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.year_format, YearFormat::Number);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "awards-server",
            "--data-file",
            "/tmp/awards.csv",
            "--delimiter",
            ",",
            "--bind",
            "0.0.0.0:9000",
            "--year-format",
            "text",
        ])
        .unwrap();

        assert_eq!(config.dataset.data_file, PathBuf::from("/tmp/awards.csv"));
        assert_eq!(config.dataset.delimiter_byte().unwrap(), b',');
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.year_format, YearFormat::Text);
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let config =
            ServerConfig::try_parse_from(["awards-server", "--delimiter", "§"]).unwrap();
        assert!(config.dataset.delimiter_byte().is_err());
    }
}
