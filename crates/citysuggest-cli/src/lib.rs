//! citysuggest-cli
//! ===============
//!
//! Command-line front end for the `citysuggest-core` suggestion engine.
//!
//! The binary (`citysuggest`) loads a gazetteer and prints ranked
//! suggestions as JSON. The request mapping lives here, in the library
//! target, so it can be exercised against any
//! [`SuggestionSource`](citysuggest_core::SuggestionSource), including test
//! doubles.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citysuggest suggest québec
//! citysuggest suggest lond --latitude 43.7 --longitude -79.4 --pretty
//! citysuggest --input cities_canada-usa.tsv --header stats
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod handler;
