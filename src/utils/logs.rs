use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LogFormat {
    Text,
    Json,
}

impl From<String> for LogFormat {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

pub fn setup_tracing(format: LogFormat, level: Level) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false);
    match format {
        LogFormat::Text => builder.without_time().init(),
        LogFormat::Json => builder.with_ansi(false).json().init(),
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::logs::LogFormat;

    #[test]
    fn test_should_format_log_format() {
        for format in vec![LogFormat::Text, LogFormat::Json] {
            let str = format.to_string();
            assert_eq!(format, LogFormat::from(str));
        }
        assert_eq!(LogFormat::Json, LogFormat::from("JSON".to_string()));
        assert_eq!(LogFormat::Text, LogFormat::from("other".to_string()));
    }
}
