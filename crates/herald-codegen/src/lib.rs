// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Code generation engine for Herald message interfaces.
//!
//! Given a parsed [`herald_model::MessageInterface`], this crate builds
//! abstract class models for an external emitter to render:
//!
//! - [`implementation`] — the default-locale implementation, one generated
//!   method body per interface method.
//! - [`translation`] — a locale-specific subclass overriding only the
//!   methods with a provided translation; the rest is inherited.
//! - [`translation_i18n`] — an aggregator routing calls to the matching
//!   locale implementation at runtime, falling back to the default.
//!
//! All three entry points are pure and deterministic: no caching, no shared
//! state, same input gives the same model or the same typed error. Callers
//! must generate the base implementation before translations, and all
//! translations before the aggregator, for any one interface; superclasses
//! are referenced by generated name only.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use herald_codegen::{implementation, translation, Strategy};
//! use herald_model::{
//!     LogLevel, Marker, MessageInterface, MessageMethod, Parameter, ReturnKind, Translations,
//! };
//!
//! let info = MessageMethod {
//!     name: "info".to_string(),
//!     parameters: vec![Parameter {
//!         name: "msg".to_string(),
//!         type_name: "String".to_string(),
//!         is_cause: false,
//!     }],
//!     message: "Hello %s".to_string(),
//!     level: Some(LogLevel::Info),
//!     return_kind: ReturnKind::Void,
//! };
//! let interface = MessageInterface {
//!     package: "com.example".to_string(),
//!     simple_name: "Messages".to_string(),
//!     enclosing: vec![],
//!     markers: BTreeSet::from([Marker::Logger]),
//!     methods: vec![info.clone()],
//! };
//!
//! let base = implementation(&interface).unwrap();
//! assert_eq!(base.class_name, "com.example.Messages_$impl");
//! assert_eq!(base.strategy, Strategy::Logger);
//!
//! let translations: Translations =
//!     [(info, "Hallo %s".to_string())].into_iter().collect();
//! let german = translation(&interface, "_de", &translations).unwrap();
//! assert_eq!(german.class_name, "com.example.Messages_de");
//! assert_eq!(german.superclass_name.as_deref(), Some("com.example.Messages_$impl"));
//! ```

pub mod class_model;
pub mod error;
pub mod i18n;
pub mod implementor;
pub mod naming;
pub mod strategy;
pub mod translator;

pub use class_model::{
	ClassModel, InterfaceModel, LocaleRoute, MethodBody, MethodBodyKind, RoutedMethod,
};
pub use error::{CodegenError, Result};
pub use i18n::translation_i18n;
pub use implementor::implementation;
pub use naming::{
	enclosing_translation_class_name, implementation_class_name, ClassNameSuffix, LocaleSuffix,
	I18N_SUFFIX, IMPL_SUFFIX,
};
pub use strategy::Strategy;
pub use translator::translation;
