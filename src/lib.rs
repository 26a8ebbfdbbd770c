#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod bot;
pub mod channels;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod links;
pub mod summarizer;

pub use config::Config;
pub use error::{FlookError, Result};
pub use extract::{ExtractionResult, PageDocument, build_summary_input, extract_meta};
