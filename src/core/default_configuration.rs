use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3000/api/contacts/";
pub const DEFAULT_SEARCH_DEBOUNCE: u64 = 300;

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "serviceUrl")]
    service_url     : Option<String>,
    #[serde(rename = "searchDebounce")]
    search_debounce : Option<u64>,

    #[serde(rename = "logger")]
    logger          : Option<LogCfg>,
}

pub struct Builder<'a> {
    service_url     : Option<&'a str>,
    search_debounce : Option<u64>,

    log_level       : Option<LevelFilter>,
    log_file        : Option<&'a str>,

    cfg             : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            service_url     : None,
            search_debounce : None,
            log_level       : None,
            log_file        : None,
            cfg             : None,
        }
    }

    pub fn with_service_url(&mut self, url: &'a str) -> &mut Self {
        self.service_url = Some(url);
        self
    }

    pub fn with_search_debounce(&mut self, millis: u64) -> &mut Self {
        self.search_debounce = Some(millis);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                service_url     : None,
                search_debounce : None,
                logger          : None,
            }
        };

        if let Some(url) = b.service_url {
            cfg.service_url = Some(url.to_string());
        }
        if cfg.service_url.is_none() {
            cfg.service_url = Some(DEFAULT_SERVICE_URL.to_string());
        }
        if let Some(url) = cfg.service_url.as_ref() {
            check_service_url(url)?;
        }

        if let Some(millis) = b.search_debounce {
            cfg.search_debounce = Some(millis);
        }

        if let Some(ref mut logger) = cfg.logger {
            match logger.level.parse::<LevelFilter>().ok() {
                Some(level) => logger.deserde_level = Some(level),
                None => logger.deserde_level = Some(LevelFilter::Info),
            }
            if let Some(level) = b.log_level {
                logger.deserde_level = Some(level);
                logger.level = level.to_string();
            }
            if let Some(file) = b.log_file {
                logger.file = Some(file.to_string());
            }
        } else {
            cfg.logger = Some(LogCfg {
                level: b.log_level.unwrap_or(LevelFilter::Info).to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: Some(b.log_level.unwrap_or(LevelFilter::Info)),
            });
        }

        Ok(cfg)
    }
}

// Contact ids are appended to the base url verbatim, so the base has to
// end with the path separator.
fn check_service_url(input: &str) -> Result<()> {
    Url::parse(input)?;
    if !input.ends_with('/') {
        return Err(Error::Argument(format!("Service url {} must end with '/'", input)));
    }
    Ok(())
}

impl Config for Configuration {
    fn service_url(&self) -> &str {
        self.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }

    fn search_debounce(&self) -> u64 {
        self.search_debounce.unwrap_or(DEFAULT_SEARCH_DEBOUNCE)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "serviceUrl:{},searchDebounce:{}ms,logger:{}",
            self.service_url(),
            self.search_debounce(),
            self.log_level()
        )?;
        if let Some(file) = self.log_file() {
            write!(f, "({})", file)?;
        }
        Ok(())
    }
}
