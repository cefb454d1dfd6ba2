//! Fallback chains backed by remote providers
//!
//! Both services degrade to the local word list whenever the network is
//! unavailable, slow, or answers with something unusable.

mod validator;
mod word_source;

pub use validator::Validator;
pub use word_source::WordSource;
