use crate::channels::traits::{Channel, ChannelMessage};
use crate::config::IrcConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{Mutex, mpsc};

use tokio_rustls::rustls;

use super::auth::encode_sasl_plain;
use super::message::{SENDER_PREFIX_RESERVE, split_message, strip_ctcp};
use super::parse::IrcMessage;
use super::tls::NoVerify;

/// No data for this long means the connection is dead. Servers PING every
/// 60-120s.
const READ_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(300);

/// Keeps message IDs unique under burst traffic.
static MSG_SEQ: AtomicU64 = AtomicU64::new(0);

type TlsStream = tokio_rustls::client::TlsStream<tokio::net::TcpStream>;
type WriteHalf = tokio::io::WriteHalf<TlsStream>;

/// IRC over TLS.
///
/// Registers (optionally with SASL PLAIN), joins the configured channels and
/// forwards every `PRIVMSG` from an allowed nick, channel or DM.
pub struct IrcChannel {
    pub(super) server: String,
    pub(super) port: u16,
    pub(super) nickname: String,
    pub(super) username: String,
    pub(super) channels: Vec<String>,
    pub(super) allowed_users: Vec<String>,
    pub(super) server_password: Option<String>,
    pub(super) nickserv_password: Option<String>,
    pub(super) sasl_password: Option<String>,
    pub(super) verify_tls: bool,
    writer: Arc<Mutex<Option<WriteHalf>>>,
}

impl IrcChannel {
    pub fn from_config(config: &IrcConfig) -> Self {
        Self {
            server: config.server.clone(),
            port: config.port,
            nickname: config.nickname.clone(),
            username: config
                .username
                .clone()
                .unwrap_or_else(|| config.nickname.clone()),
            channels: config.channels.clone(),
            allowed_users: config.allowed_users.clone(),
            server_password: config.server_password.clone(),
            nickserv_password: config.nickserv_password.clone(),
            sasl_password: config.sasl_password.clone(),
            verify_tls: config.verify_tls.unwrap_or(true),
            writer: Arc::new(Mutex::new(None)),
        }
    }

    /// An empty allowlist or `"*"` lets everybody in.
    pub(super) fn is_user_allowed(&self, nick: &str) -> bool {
        self.allowed_users.is_empty()
            || self
                .allowed_users
                .iter()
                .any(|u| u == "*" || u.eq_ignore_ascii_case(nick))
    }

    /// Turn a parsed `PRIVMSG` into a [`ChannelMessage`], or drop it.
    pub(super) fn to_channel_message(
        &self,
        msg: &IrcMessage,
        current_nick: &str,
    ) -> Option<ChannelMessage> {
        let target = msg.param(0);
        let sender_nick = msg.nick()?;

        if sender_nick.eq_ignore_ascii_case("NickServ")
            || sender_nick.eq_ignore_ascii_case("ChanServ")
            || sender_nick.eq_ignore_ascii_case(current_nick)
        {
            return None;
        }
        if !self.is_user_allowed(sender_nick) {
            tracing::debug!(nick = sender_nick, "irc.privmsg.not_allowed");
            return None;
        }
        let text = strip_ctcp(msg.param(1))?;

        let is_channel = target.starts_with('#') || target.starts_with('&');
        let reply_to = if is_channel { target } else { sender_nick };

        let seq = MSG_SEQ.fetch_add(1, Ordering::Relaxed);
        Some(ChannelMessage {
            id: format!("irc_{}_{seq}", chrono::Utc::now().timestamp_millis()),
            sender: sender_nick.to_string(),
            reply_to: reply_to.to_string(),
            content: text.to_string(),
            channel: "irc".to_string(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        })
    }

    async fn connect(&self) -> anyhow::Result<TlsStream> {
        let addr = format!("{}:{}", self.server, self.port);
        let tcp = tokio::net::TcpStream::connect(&addr)
            .await
            .map_err(|e| TransportError::Connection {
                channel: "irc".into(),
                message: format!("{addr}: {e}"),
            })?;

        let tls_config = if self.verify_tls {
            let root_store: rustls::RootCertStore =
                webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();
            rustls::ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth()
        } else {
            rustls::ClientConfig::builder()
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(NoVerify))
                .with_no_client_auth()
        };

        let connector = tokio_rustls::TlsConnector::from(Arc::new(tls_config));
        let domain = rustls::pki_types::ServerName::try_from(self.server.clone())?;
        Ok(connector.connect(domain, tcp).await?)
    }

    async fn send_raw(writer: &mut WriteHalf, line: &str) -> anyhow::Result<()> {
        let data = format!("{line}\r\n");
        writer.write_all(data.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Write through the shared half; a no-op before `listen` connects.
    async fn write_line(&self, line: &str) -> anyhow::Result<()> {
        let mut guard = self.writer.lock().await;
        if let Some(ref mut w) = *guard {
            Self::send_raw(w, line).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Channel for IrcChannel {
    fn name(&self) -> &str {
        "irc"
    }

    fn max_message_length(&self) -> usize {
        400
    }

    async fn send(&self, message: &str, recipient: &str) -> anyhow::Result<()> {
        let mut guard = self.writer.lock().await;
        let writer = guard.as_mut().ok_or_else(|| TransportError::Send {
            channel: "irc".into(),
            message: "not connected".into(),
        })?;

        // 512 - sender prefix - "PRIVMSG " - target - " :" - "\r\n"
        let overhead = SENDER_PREFIX_RESERVE + 10 + recipient.len() + 2;
        let max_payload = 512_usize.saturating_sub(overhead);

        for chunk in split_message(message, max_payload) {
            Self::send_raw(writer, &format!("PRIVMSG {recipient} :{chunk}")).await?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    async fn listen(&self, tx: mpsc::Sender<ChannelMessage>) -> anyhow::Result<()> {
        let mut current_nick = self.nickname.clone();
        tracing::info!(
            server = %self.server,
            port = self.port,
            nick = %current_nick,
            "irc.connecting"
        );

        let tls = self.connect().await?;
        let (reader, mut writer) = tokio::io::split(tls);

        if self.sasl_password.is_some() {
            Self::send_raw(&mut writer, "CAP REQ :sasl").await?;
        }
        if let Some(ref pass) = self.server_password {
            Self::send_raw(&mut writer, &format!("PASS {pass}")).await?;
        }
        Self::send_raw(&mut writer, &format!("NICK {current_nick}")).await?;
        Self::send_raw(&mut writer, &format!("USER {} 0 * :flook", self.username)).await?;

        *self.writer.lock().await = Some(writer);

        let mut buf_reader = BufReader::new(reader);
        let mut line = String::new();
        let mut registered = false;
        let mut sasl_pending = self.sasl_password.is_some();

        loop {
            line.clear();
            let n = tokio::time::timeout(READ_TIMEOUT, buf_reader.read_line(&mut line))
                .await
                .map_err(|_| {
                    anyhow::anyhow!("IRC read timed out (no data for {READ_TIMEOUT:?})")
                })??;
            if n == 0 {
                anyhow::bail!("IRC connection closed by server");
            }

            let Some(msg) = IrcMessage::parse(&line) else {
                continue;
            };

            match msg.command.as_str() {
                "PING" => {
                    self.write_line(&format!("PONG :{}", msg.param(0))).await?;
                }

                "CAP" if sasl_pending && msg.params.iter().any(|p| p.contains("sasl")) => {
                    if msg.params.iter().any(|p| p == "ACK") {
                        self.write_line("AUTHENTICATE PLAIN").await?;
                    } else if msg.params.iter().any(|p| p == "NAK") {
                        tracing::warn!("irc.sasl.unsupported");
                        sasl_pending = false;
                        self.write_line("CAP END").await?;
                    }
                }

                "AUTHENTICATE" if sasl_pending && msg.param(0) == "+" => {
                    let encoded = encode_sasl_plain(
                        &current_nick,
                        self.sasl_password.as_deref().unwrap_or(""),
                    );
                    self.write_line(&format!("AUTHENTICATE {encoded}")).await?;
                }

                // RPL_SASLSUCCESS
                "903" => {
                    sasl_pending = false;
                    self.write_line("CAP END").await?;
                }

                "904" | "905" | "906" | "907" => {
                    tracing::warn!(code = %msg.command, "irc.sasl.failed");
                    sasl_pending = false;
                    self.write_line("CAP END").await?;
                }

                // RPL_WELCOME
                "001" => {
                    registered = true;
                    tracing::info!(nick = %current_nick, "irc.registered");

                    if let Some(ref pass) = self.nickserv_password {
                        self.write_line(&format!("PRIVMSG NickServ :IDENTIFY {pass}"))
                            .await?;
                    }
                    for chan in &self.channels {
                        self.write_line(&format!("JOIN {chan}")).await?;
                        tracing::info!(channel = %chan, "irc.join");
                    }
                }

                // ERR_NICKNAMEINUSE
                "433" => {
                    let alt = format!("{current_nick}_");
                    tracing::warn!(nick = %current_nick, retry = %alt, "irc.nick_in_use");
                    self.write_line(&format!("NICK {alt}")).await?;
                    current_nick = alt;
                }

                "PRIVMSG" if registered => {
                    let Some(channel_msg) = self.to_channel_message(&msg, &current_nick) else {
                        continue;
                    };
                    if tx.send(channel_msg).await.is_err() {
                        return Ok(());
                    }
                }

                // ERR_PASSWDMISMATCH
                "464" => {
                    anyhow::bail!("IRC password mismatch");
                }

                "ERROR" => {
                    anyhow::bail!("IRC server closed the link: {}", msg.param(0));
                }

                _ => {}
            }
        }
    }
}
