//! Request pipeline middleware and extractors.
//!
//! - `boundary` - async boundary wrapper forwarding every handler failure to the terminal
//! - `terminal` - last stage of the chain, turns delivered failures into envelopes
//! - `validate` - request-body extractor enforcing the endpoint's schema

pub mod boundary;
pub mod terminal;
pub mod validate;

#[cfg(test)]
mod test;
