use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const CFG_FILE_NAME: &str = "crashout.toml";
pub const SAMPLE_CONFIG: &str = include_str!("../crashout.toml");
pub const DEFAULT_API_BASE_URL: &str = "https://y0h0i3cmkmkd.manus.space";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Deserialize)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
}

#[derive(Deserialize, Clone)]
pub struct Api {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Api {
    fn default() -> Self {
        Api {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Api,
    Local,
}

#[derive(Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub source: SourceKind,
    pub posts_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Defaults {
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_author")]
    pub default_author: String,
    #[serde(default)]
    pub escape_html: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            default_category: default_category(),
            default_author: default_author(),
            escape_html: false,
        }
    }
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_category() -> String {
    "General".to_string()
}

fn default_author() -> String {
    "CrashoutBets Team".to_string()
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.to_str()) {
        (Some(exe_dir), Some(str_path)) => {
            PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy()))
        }
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        template_dir: parse_path(cfg.paths.template_dir),
        public_dir: parse_path(cfg.paths.public_dir),
    };
    cfg.content.posts_dir = cfg.content.posts_dir.map(parse_path);

    if let Ok(base_url) = env::var(API_BASE_URL_ENV) {
        if !base_url.trim().is_empty() {
            cfg.api.base_url = base_url;
        }
    }

    if cfg.content.source == SourceKind::Local && cfg.content.posts_dir.is_none() {
        return Err(io::Error::new(
            ErrorKind::InvalidData, "content.posts_dir is required when content.source = \"local\""));
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

/// Looks for `crashout.toml` next to the executable, in the current
/// directory and in the user config dir, in that order.
pub fn find_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let candidates = [exe_dir, env::current_dir().ok(), dirs::config_dir()];

    candidates.into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CFG: &str = r##"
[paths]
template_dir = "site/templates"
public_dir = "site/public"

[server]
address = "127.0.0.1"
port = 8001
"##;

    #[test]
    fn test_defaults() {
        let cfg = parse_config(MINIMAL_CFG).unwrap();
        assert_eq!(cfg.content.source, SourceKind::Api);
        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.defaults.default_category, "General");
        assert_eq!(cfg.defaults.default_author, "CrashoutBets Team");
        assert!(!cfg.defaults.escape_html);
        assert!(cfg.log.is_none());
        assert_eq!(cfg.paths.template_dir, PathBuf::from("site/templates"));
    }

    #[test]
    fn test_full_config() {
        let cfg_src = r##"
[paths]
template_dir = "${exe_dir}/templates"
public_dir = "public"

[api]
base_url = "http://localhost:9000"
timeout_secs = 3

[content]
source = "local"
posts_dir = "posts"

[defaults]
default_category = "Picks"
escape_html = true

[server]
address = "0.0.0.0"
port = 80

[log]
level = "Debug"
log_to_console = true
location = "logs/blog.log"
"##;
        let cfg = parse_config(cfg_src).unwrap();
        assert_eq!(cfg.api.timeout_secs, 3);
        assert_eq!(cfg.content.source, SourceKind::Local);
        assert_eq!(cfg.content.posts_dir, Some(PathBuf::from("posts")));
        assert_eq!(cfg.defaults.default_category, "Picks");
        assert_eq!(cfg.defaults.default_author, "CrashoutBets Team");
        assert!(cfg.defaults.escape_html);
        assert_eq!(cfg.log.as_ref().map(|l| l.level), Some(LogLevel::Debug));
        assert!(!cfg.paths.template_dir.to_string_lossy().contains("${exe_dir}"));
        assert!(cfg.paths.template_dir.ends_with("templates"));
    }

    #[test]
    fn test_local_source_needs_dir() {
        let cfg_src = format!("{}\n[content]\nsource = \"local\"\n", MINIMAL_CFG);
        let err = parse_config(&cfg_src).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_sample_config() {
        let cfg = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.content.source, SourceKind::Api);
        assert!(cfg.log.is_some());
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\ntemplate_dir = 1").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
