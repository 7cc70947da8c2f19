use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// Regex for OpenAI secret keys
    /// `sk-` followed by at least 20 key characters
    /// - Valid: "sk-test1234567890123456789012345678901234567890", "sk-proj-abcdEFGH1234ijklMNOP"
    /// - Invalid: "sk-short", "pk-1234567890123456789012", "sk- 1234567890123456789012"
    pub static ref API_KEY_REGEX: Regex = Regex::new(r"^sk-[A-Za-z0-9_-]{20,}$").unwrap();
}
