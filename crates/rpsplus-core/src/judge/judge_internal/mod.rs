//! Judge internals.
//!
//! - run.rs: judging flow per mode
//! - prompt.rs: instruction blocks and per-round context builders only
//! - client.rs: service call + reply decode boundary
//! - validate.rs: normalisation of decoded replies into closed enums

pub(crate) mod client;
pub(crate) mod prompt;
pub(crate) mod run;
pub(crate) mod validate;
