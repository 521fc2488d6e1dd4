mod client;
mod session;

pub use client::ChatClient;
pub use session::{ChatLine, ChatMessage, ChatSession, Sender, FAREWELL};
