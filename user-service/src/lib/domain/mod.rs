pub mod auth;
pub mod role;
pub mod user;

#[cfg(test)]
pub(crate) mod mocks;
