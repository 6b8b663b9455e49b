//! The library code for the `protopage` prototype-page generator. The whole
//! job breaks down into two small steps:
//!
//! 1. A static list of page descriptors ([`crate::page`]) names every
//!    prototype page: where it lives under the output root, what title it
//!    displays, and the relative prefix back to the shared assets.
//! 2. The generator ([`crate::write`]) renders the shared device-frame
//!    template ([`crate::template`]) once per descriptor and writes the
//!    result to disk, creating parent directories on demand.
//!
//! There is deliberately no more to it: the descriptor list is fixed at
//! authoring time, every page uses the same template, and a rerun simply
//! overwrites the previous output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod page;
pub mod template;
pub mod write;
