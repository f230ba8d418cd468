//! Phrase lookup for translators.
//!
//! This module holds the per-language store, the dotted-key resolver, the
//! placeholder interpolator and the normalization of translate arguments.
//! Everything here is a pure function of its inputs; `Translator` ties the
//! pieces to its own state.

mod args;
mod error;
mod interpolate;
mod resolve;
mod store;

pub use args::{NormalizedArgs, TranslateArg, normalize_args};
pub use error::{LookupError, TranslationWarning, compute_suggestions};
pub use interpolate::interpolate;
pub use resolve::{KEY_SEPARATOR, resolve};
pub use store::TranslationStore;
