use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// SASL PLAIN payload: base64 of `\0<nick>\0<password>`.
pub(super) fn encode_sasl_plain(nick: &str, password: &str) -> String {
    let payload = format!("\0{nick}\0{password}");
    STANDARD.encode(payload)
}
