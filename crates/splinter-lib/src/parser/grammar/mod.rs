//! Grammar productions for SPL.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Every production consumes at least one token or reports an error without
//! consuming, and every stage ends at `|`, `]` or end of input.

mod commands;
mod expressions;
mod helpers;
mod pipeline;
mod search;
