//! Core invoice types, BTW calculation, draft lines, and validation.
//!
//! This module provides the foundational types for Dutch small-business
//! bookkeeping: purchase and sales invoices with the closed BTW rate set,
//! the inclusive/exclusive BTW calculator, and the multi-line invoice draft.

mod btw;
mod builder;
mod draft;
mod error;
mod types;
mod validation;

pub use btw::*;
pub use builder::*;
pub use draft::*;
pub use error::*;
pub use types::*;
pub use validation::*;
