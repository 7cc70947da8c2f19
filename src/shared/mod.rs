pub mod constants;
pub mod output;
pub mod polling;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
