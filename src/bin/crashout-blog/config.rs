use std::env;
use std::path::PathBuf;

use crashout_blog::config::{find_config_path, read_config, Config};

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(find_config_path) {
        None => return Err("Could not find crashout.toml configuration".to_string()),
        Some(x) => x,
    };

    if let Ok(cur_dir) = env::current_dir() {
        println!("Current dir: {}", cur_dir.display());
    }
    println!("Reading config from {}", config_path.display());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir()
                .map(|dir| dir.join("CrashoutBlog").join("log").join("server.log"));
        }
        match log.location {
            Some(ref location) => println!("Log enabled. Files will be written in {}", location.display()),
            None => println!("Log enabled. No cache dir available, logging to console only"),
        }
        config.log = Some(log);
    } else {
        println!("Log disabled. Using stdout");
    }

    Ok(config)
}
