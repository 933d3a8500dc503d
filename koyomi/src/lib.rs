//! # koyomi
//!
//! Japanese lunisolar calendar (kyūreki) computation engine.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `koyomi-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! koyomi = "0.1"
//! ```
//!
//! ```rust
//! use koyomi::kyureki::Koyomi;
//! use koyomi::time::Date;
//!
//! let mut koyomi = Koyomi::new();
//! let info = koyomi
//!     .info_for(Date::from_ymd(2024, 5, 5).unwrap())
//!     .unwrap();
//!
//! assert_eq!(info.holiday, Some("こどもの日"));
//! assert_eq!(info.weekday_name, "日");
//! assert_eq!(info.rokuyo.name(), "先勝");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types and error definitions.
pub use koyomi_core as core;

/// Date and weekday types.
pub use koyomi_time as time;

/// The calendar engine.
pub use koyomi_kyureki as kyureki;
