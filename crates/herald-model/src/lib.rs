// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Model types for the Herald message-interface code generator.
//!
//! This crate describes what an annotated message interface looks like after
//! parsing: the interface itself, its methods with their default-locale
//! message text, and the per-locale translation maps read from resource
//! files. The types here are produced by the external parser layer and
//! consumed read-only by `herald-codegen`.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use herald_model::{
//!     LogLevel, Marker, MessageInterface, MessageMethod, Parameter, ReturnKind,
//! };
//!
//! let interface = MessageInterface {
//!     package: "com.example".to_string(),
//!     simple_name: "Messages".to_string(),
//!     enclosing: vec![],
//!     markers: BTreeSet::from([Marker::Logger]),
//!     methods: vec![MessageMethod {
//!         name: "info".to_string(),
//!         parameters: vec![Parameter {
//!             name: "msg".to_string(),
//!             type_name: "String".to_string(),
//!             is_cause: false,
//!         }],
//!         message: "Hello %s".to_string(),
//!         level: Some(LogLevel::Info),
//!         return_kind: ReturnKind::Void,
//!     }],
//! };
//!
//! assert_eq!(interface.qualified_name(), "com.example.Messages");
//! assert!(interface.is_annotated_with(Marker::Logger));
//! ```

pub mod interface;
pub mod method;
pub mod translation;

pub use interface::{Marker, MessageInterface};
pub use method::{LogLevel, MessageMethod, Parameter, ReturnKind};
pub use translation::{Translations, TranslationsByLocale};
