//! Command handlers.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `search` | Search |
//! | `store` | Lookup, Info |

pub mod search;
pub mod store;
