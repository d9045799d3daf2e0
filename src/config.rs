use anyhow::{anyhow, Result};
use clap::Parser;

use crate::constants::catalog::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::theme::Theme;

/// galleryx - paginated character gallery in the terminal
///
/// Browse the character catalog page by page and mark favourites for the session.
/// Configuration priority: CLI args > Environment variables (.env included) > Defaults
#[derive(Parser, Debug, Default)]
#[command(name = "galleryx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Paginated character gallery browser", long_about = None)]
pub struct CliArgs {
    /// Catalog base URL (requests go to <url>/characters?page=N)
    #[arg(long, env = "CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Catalog request timeout in milliseconds (1000-60000)
    #[arg(long, env = "FETCH_TIMEOUT_MS")]
    pub fetch_timeout_ms: Option<u64>,

    /// Page to open on startup (>= 1)
    #[arg(long, env = "START_PAGE")]
    pub start_page: Option<u32>,

    /// Comma-separated character ids to start as favourites (e.g., "25,30")
    #[arg(long, env = "FAVORITES")]
    pub favorites: Option<String>,

    /// Target UI rendering FPS (1-120)
    #[arg(long, env = "RENDER_FPS")]
    pub render_fps: Option<u32>,

    /// Color theme: nord, amber-crt, green-phosphor
    #[arg(long, env = "THEME", value_parser = clap::value_parser!(Theme))]
    pub theme: Option<Theme>,

    /// File that receives log output (the terminal is busy with the UI)
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<String>,

    /// Serve a small built-in catalog instead of calling the network
    #[arg(long, env = "OFFLINE")]
    pub offline: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub catalog_url: String,
    pub fetch_timeout_ms: u64,
    pub start_page: u32,
    pub favorites: Vec<u64>,
    pub render_fps: u32,
    pub render_fps_choices: Vec<u32>,
    pub theme: Theme,
    pub log_file: String,
    pub offline: bool,
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Parse a comma-separated id list; blank entries are skipped
fn parse_id_list(s: &str) -> Result<Vec<u64>> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<u64>()
                .map_err(|_| anyhow!("FAVORITES entries must be integer ids, got '{v}'"))
        })
        .collect()
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

/// Load configuration from CLI args and environment variables
pub fn load() -> Result<Config> {
    from_args(CliArgs::parse())
}

/// Apply defaults and validation to already-parsed arguments
pub fn from_args(args: CliArgs) -> Result<Config> {
    let catalog_url = args
        .catalog_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    validate_url(&catalog_url, "CATALOG_URL")?;

    let fetch_timeout_ms = args.fetch_timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
    let fetch_timeout_ms = validate_in_range(fetch_timeout_ms, 1000, 60000, "FETCH_TIMEOUT_MS")?;

    let start_page = args.start_page.unwrap_or(1);
    let start_page = validate_in_range(start_page, 1, u32::MAX, "START_PAGE")?;

    let favorites = match args.favorites {
        Some(list) => parse_id_list(&list)?,
        None => Vec::new(),
    };

    let render_fps = args.render_fps.unwrap_or(30);
    let render_fps = validate_in_range(render_fps, 1, 120, "RENDER_FPS")?;

    Ok(Config {
        catalog_url,
        fetch_timeout_ms,
        start_page,
        favorites,
        render_fps,
        render_fps_choices: vec![20, 30, 60],
        theme: args.theme.unwrap_or_default(),
        log_file: args.log_file.unwrap_or_else(|| "galleryx.log".to_string()),
        offline: args.offline,
    })
}

impl Config {
    /// Log the effective configuration
    pub fn log_summary(&self) {
        log::info!("galleryx configuration:");
        if self.offline {
            log::info!("  Catalog: built-in sample (offline)");
        } else {
            log::info!("  Catalog URL: {}", self.catalog_url);
            log::info!("  Fetch Timeout: {}ms", self.fetch_timeout_ms);
        }
        log::info!("  Start Page: {}", self.start_page);
        log::info!("  Seeded Favourites: {}", self.favorites.len());
        log::info!("  Render FPS: {}", self.render_fps);
        log::info!("  Theme: {}", self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = from_args(CliArgs::default()).unwrap();
        assert_eq!(cfg.catalog_url, "https://api.disneyapi.dev");
        assert_eq!(cfg.fetch_timeout_ms, 8000);
        assert_eq!(cfg.start_page, 1);
        assert!(cfg.favorites.is_empty());
        assert_eq!(cfg.theme, Theme::Nord);
        assert!(!cfg.offline);
    }

    #[test]
    fn favorites_list_is_parsed() {
        let args = CliArgs {
            favorites: Some(" 25, 30,,7 ".into()),
            ..Default::default()
        };
        assert_eq!(from_args(args).unwrap().favorites, vec![25, 30, 7]);
    }

    #[test]
    fn bad_values_are_rejected() {
        let bad_url = CliArgs {
            catalog_url: Some("ftp://catalog".into()),
            ..Default::default()
        };
        assert!(from_args(bad_url).is_err());

        let page_zero = CliArgs {
            start_page: Some(0),
            ..Default::default()
        };
        assert!(from_args(page_zero).is_err());

        let bad_fav = CliArgs {
            favorites: Some("25,abc".into()),
            ..Default::default()
        };
        assert!(from_args(bad_fav).is_err());

        let slow = CliArgs {
            fetch_timeout_ms: Some(120_000),
            ..Default::default()
        };
        assert!(from_args(slow).is_err());
    }

    #[test]
    fn cli_flags_parse() {
        let args = CliArgs::try_parse_from([
            "galleryx",
            "--catalog-url",
            "http://localhost:8080",
            "--start-page",
            "3",
            "--theme",
            "amber",
            "--offline",
        ])
        .unwrap();
        let cfg = from_args(args).unwrap();
        assert_eq!(cfg.catalog_url, "http://localhost:8080");
        assert_eq!(cfg.start_page, 3);
        assert_eq!(cfg.theme, Theme::AmberCrt);
        assert!(cfg.offline);
    }
}
