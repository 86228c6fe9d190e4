//! Media synthesis for Adcraft.
//!
//! [`MediaSynthesisService`] turns ad content plus generation options into one
//! or two [`MediaAsset`]s. The actual rendering is delegated to any
//! [`SynthesisProvider`]; two ship with the crate:
//!
//! - [`StockLibraryProvider`] picks deterministically from fixed stock pools
//! - [`RemoteSynthesisProvider`] calls an HTTP image/video generation backend
//!
//! [`MediaAsset`]: adcraft_core::MediaAsset
//! [`SynthesisProvider`]: adcraft_interface::SynthesisProvider

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod remote;
mod service;
mod stock;

pub use remote::RemoteSynthesisProvider;
pub use service::{MediaSynthesisService, QUALITY_SUFFIX, enhanced_prompt};
pub use stock::StockLibraryProvider;
