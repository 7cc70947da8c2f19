mod api_key_handler;

pub use api_key_handler::{handle, ApiKeyCommand};
