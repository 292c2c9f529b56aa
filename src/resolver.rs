//! Translation resolution: `(key, language) -> String`, never failing.
//!
//! A key is looked up in the requested language's tree, then in the default
//! language's tree, and if neither yields a usable value the key itself is
//! returned.

pub mod coverage;
pub mod lookup;
pub mod set;

pub use coverage::CoverageReport;
pub use lookup::{
    DEFAULT_KEY_SEPARATOR,
    Resolution,
    TranslationResolver,
};
pub use set::{
    SetError,
    TranslationSet,
};
