pub mod irc;
pub mod traits;

pub use irc::IrcChannel;
pub use traits::{Channel, ChannelMessage};
