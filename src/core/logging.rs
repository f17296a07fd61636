//! Logging and diagnostic reporting.
//!
//! The dashboard owns the terminal while it runs, so log output goes to a
//! daily-rolling JSON file only. `log` macros are bridged into `tracing`,
//! and fatal errors are rendered by `miette` once the terminal is restored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use flate2::write::GzEncoder;
use flate2::Compression;
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Base name of the rolling log file.
pub const LOG_FILE_PREFIX: &str = "hospitality-ai.log";

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn get_terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// Terminal color support levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    TrueColor,
    Ansi256,
    Ansi16,
    NoColor,
}

/// Detected terminal capabilities
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stderr) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let is_interactive = io::stderr().is_terminal();

        // Unicode support heuristic
        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive,
        }
    }

    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

/// Resolve the log directory (configured override or XDG data dir).
pub fn log_dir(config: &LoggingConfig) -> PathBuf {
    config.log_dir.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .map(|d| d.join("hospitality-ai").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    })
}

/// Initialize file logging for TUI mode.
///
/// No stdout layer is installed: ratatui owns the terminal in raw mode.
/// `RUST_LOG` overrides the configured level. The returned guard must stay
/// alive until shutdown so buffered records are flushed.
pub fn init_tui(config: &LoggingConfig) -> WorkerGuard {
    let log_dir = log_dir(config);

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    let subscriber = tracing_subscriber::registry().with(file_layer);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    init_miette();

    // Compress old logs in background (after the bridge so log macros work)
    let log_dir_clone = log_dir.clone();
    std::thread::spawn(move || {
        compress_old_logs(&log_dir_clone);
    });

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_PREFIX)
    );

    guard
}

/// Gzip rolled log files from previous days. Returns how many were compressed.
pub fn compress_old_logs(log_dir: &Path) -> usize {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();
    let rolled_prefix = format!("{LOG_FILE_PREFIX}.");
    let mut compressed = 0;

    let Ok(entries) = fs::read_dir(log_dir) else {
        return 0;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // Rolling format: prefix.YYYY-MM-DD; today's file is still open
        let should_compress = name.starts_with(&rolled_prefix)
            && !name.ends_with(&today_suffix)
            && !name.ends_with(".gz");
        if !should_compress {
            continue;
        }

        match compress_file(&path) {
            Ok(()) => {
                log::info!("Compressed old log: {:?}", path);
                compressed += 1;
            }
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }

    compressed
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path.with_file_name(gz_name);

    // Skip if already exists
    if gz_path.exists() {
        return Ok(());
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}

/// Configure miette's report handler from the detected terminal.
fn init_miette() {
    let caps = get_terminal_caps();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::GzDecoder;

    use super::*;

    #[test]
    fn test_terminal_caps_detection() {
        let caps = TerminalCapabilities::detect();
        if caps.color_level == ColorLevel::NoColor {
            assert!(!caps.should_colorize());
        }
    }

    #[test]
    fn test_log_dir_override() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            log_dir: Some(PathBuf::from("/tmp/hospitality-logs")),
        };
        assert_eq!(log_dir(&config), PathBuf::from("/tmp/hospitality-logs"));
    }

    #[test]
    fn test_compress_old_logs_skips_today() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join(format!("{LOG_FILE_PREFIX}.2024-01-15"));
        let today = dir.path().join(format!(
            "{LOG_FILE_PREFIX}.{}",
            chrono::Local::now().format("%Y-%m-%d")
        ));
        let unrelated = dir.path().join("notes.txt");
        fs::write(&old, "{\"level\":\"INFO\"}\n").unwrap();
        fs::write(&today, "current").unwrap();
        fs::write(&unrelated, "keep").unwrap();

        assert_eq!(compress_old_logs(dir.path()), 1);

        assert!(!old.exists());
        assert!(today.exists());
        assert!(unrelated.exists());

        let gz = dir.path().join(format!("{LOG_FILE_PREFIX}.2024-01-15.gz"));
        let mut decoded = String::new();
        GzDecoder::new(fs::File::open(gz).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "{\"level\":\"INFO\"}\n");
    }

    #[test]
    fn test_compress_missing_dir_is_noop() {
        assert_eq!(compress_old_logs(Path::new("/nonexistent/hospitality/logs")), 0);
    }
}
