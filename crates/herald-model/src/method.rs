// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message method model.
//!
//! A [`MessageMethod`] is the unit of code generation: one declared method on
//! a message interface, carrying the default-locale message text. Methods key
//! per-locale translation maps, so their equality, hashing, and ordering are
//! defined over the structural signature (name plus parameter type list) and
//! nothing else.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Log level attached to a logger-strategy method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
	Trace,
	Debug,
	Info,
	Warn,
	Error,
	Fatal,
}

impl std::fmt::Display for LogLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			LogLevel::Trace => "TRACE",
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
			LogLevel::Fatal => "FATAL",
		};
		write!(f, "{name}")
	}
}

/// What a message method returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnKind {
	/// Returns nothing. The only valid shape for logger methods.
	Void,
	/// Returns the formatted message itself.
	Message,
	/// Constructs and returns a throwable built from the formatted message.
	Throwable {
		/// Name of the throwable class to construct.
		class_name: String,
	},
}

/// One declared parameter of a message method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
	pub name: String,
	/// Semantic type name as declared on the interface.
	pub type_name: String,
	/// Whether this parameter is the designated cause of the message.
	pub is_cause: bool,
}

/// One method declared on a message interface.
///
/// Equality, hashing, and ordering are signature-based: two methods with the
/// same name and parameter type list compare equal even if their message
/// text, level, or return kind differ. Translation maps rely on this to look
/// up interface methods by externally parsed keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageMethod {
	pub name: String,
	pub parameters: Vec<Parameter>,
	/// Default-locale message text declared on the interface.
	pub message: String,
	/// Log level; present on logger methods, absent on bundle methods.
	pub level: Option<LogLevel>,
	pub return_kind: ReturnKind,
}

impl MessageMethod {
	/// Structural signature in `name(type, type)` form.
	pub fn signature(&self) -> String {
		let types: Vec<&str> = self.parameters.iter().map(|p| p.type_name.as_str()).collect();
		format!("{}({})", self.name, types.join(", "))
	}

	/// Parameters flagged as the message cause.
	pub fn cause_parameters(&self) -> impl Iterator<Item = &Parameter> {
		self.parameters.iter().filter(|p| p.is_cause)
	}
}

impl PartialEq for MessageMethod {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.parameters.len() == other.parameters.len()
			&& self
				.parameters
				.iter()
				.zip(&other.parameters)
				.all(|(a, b)| a.type_name == b.type_name)
	}
}

impl Eq for MessageMethod {}

impl Hash for MessageMethod {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
		for parameter in &self.parameters {
			parameter.type_name.hash(state);
		}
	}
}

impl PartialOrd for MessageMethod {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for MessageMethod {
	fn cmp(&self, other: &Self) -> Ordering {
		self.name.cmp(&other.name).then_with(|| {
			let ours = self.parameters.iter().map(|p| p.type_name.as_str());
			let theirs = other.parameters.iter().map(|p| p.type_name.as_str());
			ours.cmp(theirs)
		})
	}
}

impl std::fmt::Display for MessageMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.signature())
	}
}
