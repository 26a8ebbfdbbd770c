use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrcConfig {
    /// IRC server hostname
    #[serde(default)]
    pub server: String,
    /// IRC server port (default: 6697 for TLS)
    #[serde(default = "default_irc_port")]
    pub port: u16,
    /// Bot nickname
    #[serde(default = "default_irc_nickname")]
    pub nickname: String,
    /// Username (defaults to nickname if not set)
    pub username: Option<String>,
    /// Channels to join on connect
    #[serde(default)]
    pub channels: Vec<String>,
    /// Nicknames (case-insensitive) whose links are previewed; empty or "*" for all
    #[serde(default)]
    pub allowed_users: Vec<String>,
    /// Server password (for bouncers like ZNC)
    pub server_password: Option<String>,
    /// `NickServ` IDENTIFY password
    pub nickserv_password: Option<String>,
    /// SASL PLAIN password (`IRCv3`)
    pub sasl_password: Option<String>,
    /// Verify TLS certificate (default: true)
    pub verify_tls: Option<bool>,
}

fn default_irc_port() -> u16 {
    6697
}

fn default_irc_nickname() -> String {
    "flook".into()
}

impl IrcConfig {
    /// Apply an `IRC_SERVER`-style `host[:port]` value.
    pub fn set_address(&mut self, address: &str) {
        match address.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() => {
                if let Ok(port) = port.parse::<u16>() {
                    self.server = host.to_string();
                    self.port = port;
                } else {
                    self.server = address.to_string();
                }
            }
            _ => self.server = address.to_string(),
        }
    }
}

impl Default for IrcConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: default_irc_port(),
            nickname: default_irc_nickname(),
            username: None,
            channels: Vec::new(),
            allowed_users: Vec::new(),
            server_password: None,
            nickserv_password: None,
            sasl_password: None,
            verify_tls: None,
        }
    }
}
