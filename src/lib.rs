#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

// This must go FIRST so that all the other modules see its macros.
mod fmt;

mod error;
pub use error::{DefinitionFault, Error, InvalidParameter};

pub mod region;
pub use region::{PhyVersion, RegionDefinition, RegionId};

pub mod registry;
pub use registry::Registry;
