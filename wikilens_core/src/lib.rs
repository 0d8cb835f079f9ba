#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod card;
pub mod extract;
pub mod pipeline;
pub mod sanitize;
pub mod script;
pub mod text;

pub use card::{CardField, PageSummary, ReplyCard, TITLE_LIMIT, VALUE_LIMIT};
pub use extract::{RawTerm, raw_terms};
pub use pipeline::{SummaryProvider, build_reply};
pub use sanitize::{lookup_key, sanitize};
pub use script::Script;
pub use text::{character_length, truncate};
