mod profile_handler;
mod user_handler;

pub use profile_handler::{handle as handle_profile, ProfileCommand};
pub use user_handler::{handle, user_line, UserCommand};
