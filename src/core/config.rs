use log::LevelFilter;

pub trait Config: Send + Sync {
    /// Base url of the contact service, always ending with `/`.
    fn service_url(&self) -> &str;

    /// Quiet period of the search box, in milliseconds.
    fn search_debounce(&self) -> u64;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
