//! Integration tests for workspace checkpoint addressing

mod cli_contracts;
mod resolver_fallbacks;
