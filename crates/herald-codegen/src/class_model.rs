// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Produced class and interface models.
//!
//! These are the engine's output artifacts: abstract descriptions of the
//! classes to generate, handed to an external emitter for textual rendering.
//! Every model is built fresh per call and never cached. Superclasses are
//! referenced by generated name only; the caller guarantees the referenced
//! class is generated before or in the same pass.

use herald_model::{LogLevel, Parameter, ReturnKind};
use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

/// One generated class: an implementation or a translation subclass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
	/// Package-qualified generated class name.
	pub class_name: String,
	/// Qualified name of the message interface being implemented.
	pub interface_name: String,
	/// Generated name of the class to extend. `None` for the base
	/// implementation, which implements the interface directly.
	pub superclass_name: Option<String>,
	/// Locale string (`fr`, `fr_CA`); `None` for the default locale.
	pub locale: Option<String>,
	pub strategy: Strategy,
	/// Generated method bodies, in interface declaration order.
	pub methods: Vec<MethodBody>,
}

/// One generated method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodBody {
	pub name: String,
	pub parameters: Vec<Parameter>,
	/// Message text the body formats: the declared default message for
	/// implementations, the translated text for translations.
	pub message: String,
	pub kind: MethodBodyKind,
}

/// Strategy-specific shape of a generated method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodBodyKind {
	/// Constructs and returns a value or throwable from the formatted
	/// message, attaching the cause parameter when present.
	BundleFactory {
		return_kind: ReturnKind,
		cause_param: Option<String>,
	},
	/// Formats the message and forwards it to the logging backend at the
	/// annotated level.
	LoggerCall {
		level: LogLevel,
		cause_param: Option<String>,
	},
}

/// The i18n aggregator: routes each call to the implementation matching a
/// runtime-supplied locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceModel {
	/// Package-qualified generated aggregator name.
	pub class_name: String,
	/// Qualified name of the message interface being implemented.
	pub interface_name: String,
	pub strategy: Strategy,
	/// Implementation used when the runtime locale has no route. Fallback is
	/// total: every method resolves for every possible runtime locale.
	pub fallback_class_name: String,
	/// Locale to translation-class routes, ordered by locale suffix.
	pub routes: Vec<LocaleRoute>,
	/// Methods the aggregator routes, in interface declaration order.
	pub methods: Vec<RoutedMethod>,
}

/// One locale's entry in the aggregator routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRoute {
	/// Locale string without the leading separator (`de`, `fr_CA`).
	pub locale: String,
	/// Generated translation class handling this locale.
	pub class_name: String,
}

/// Signature of a method the aggregator dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedMethod {
	pub name: String,
	pub parameters: Vec<Parameter>,
}
