//! travellog-cli
//! =============
//!
//! Command-line interface for the `travellog-core` travel record engine.
//!
//! This crate primarily provides a binary (`travellog`). The library target
//! only exists so the crate gets a rendered documentation page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! travellog --help
//! travellog flights
//! travellog set flight sort duration_longest_first
//! travellog prefs flight
//! travellog borders SK AT
//! ```
//!
//! For programmatic access to filtering, sorting and border expansion, use
//! [`travellog-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
