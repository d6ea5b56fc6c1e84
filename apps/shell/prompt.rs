use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;
use url::Url;

/// Shows which contact service the shell is attached to, e.g.
/// `rolodex@localhost:3000$ `.
pub(crate) struct ShellPrompt {
    service: String,
}

impl ShellPrompt {
    pub(crate) fn new(service_url: &str) -> Self {
        let service = Url::parse(service_url).ok().and_then(|url| {
            let host = url.host_str()?.to_string();
            Some(match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host,
            })
        });
        Self {
            service: service.unwrap_or_default(),
        }
    }
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        match self.service.is_empty() {
            true => "rolodex$ ".into(),
            false => format!("rolodex@{}$ ", self.service).into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        Cow::Borrowed("(search) ")
    }
}
