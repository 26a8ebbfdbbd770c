use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; empty values are ignored.
    pub(super) fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(server) = get("IRC_SERVER") {
            self.irc.set_address(server.trim());
        }

        if let Some(channels) = get("IRC_CHANNEL") {
            self.irc.channels = channels
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(nick) = get("IRC_NICK") {
            self.irc.nickname = nick;
        }

        if let Some(user) = get("IRC_USER") {
            self.irc.username = Some(user);
        }

        if let Some(instance) = get("OPENAI_INSTANCE") {
            self.summarizer.instance = instance;
        }

        if let Some(token) = get("OPENAI_API_TOKEN") {
            self.summarizer.api_token = Some(token);
        }

        if let Some(max_tokens) = get("OPENAI_MAX_TOKEN")
            && let Ok(max_tokens) = max_tokens.trim().parse::<u32>()
        {
            self.summarizer.max_tokens = max_tokens;
        }

        if let Some(base_url) = get("OPENAI_BASE_URL") {
            self.summarizer.base_url = base_url;
        }
    }
}
