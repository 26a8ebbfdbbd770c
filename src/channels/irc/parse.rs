/// A parsed IRC protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct IrcMessage {
    pub(super) prefix: Option<String>,
    pub(super) command: String,
    pub(super) params: Vec<String>,
}

impl IrcMessage {
    /// Parse `[:<prefix>] <command> [<params>] [:<trailing>]`.
    ///
    /// IRCv3 message tags (`@k=v;... `) are skipped.
    pub(super) fn parse(line: &str) -> Option<Self> {
        let mut line = line.trim_end_matches(['\r', '\n']);
        if let Some(tagged) = line.strip_prefix('@') {
            line = tagged.split_once(' ')?.1;
        }
        if line.is_empty() {
            return None;
        }

        let (prefix, rest) = match line.strip_prefix(':') {
            Some(stripped) => {
                let (prefix, rest) = stripped.split_once(' ')?;
                (Some(prefix.to_string()), rest)
            }
            None => (None, line),
        };

        let (params_part, trailing) = match rest.split_once(" :") {
            Some((params, trailing)) => (params, Some(trailing)),
            None => (rest, None),
        };

        let mut parts = params_part.split_whitespace();
        let command = parts.next()?.to_ascii_uppercase();
        let mut params: Vec<String> = parts.map(str::to_string).collect();
        if let Some(t) = trailing {
            params.push(t.to_string());
        }

        Some(Self {
            prefix,
            command,
            params,
        })
    }

    /// Nickname part of the prefix (`nick!user@host` gives `nick`).
    pub(super) fn nick(&self) -> Option<&str> {
        let prefix = self.prefix.as_deref()?;
        let nick = prefix.split('!').next().unwrap_or(prefix);
        (!nick.is_empty()).then_some(nick)
    }

    pub(super) fn param(&self, idx: usize) -> &str {
        self.params.get(idx).map_or("", String::as_str)
    }
}
