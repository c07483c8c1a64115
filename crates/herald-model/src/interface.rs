// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message interface model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::method::MessageMethod;

/// Marker annotation applied to a message interface.
///
/// Exactly one marker is expected per interface; the code generation engine
/// rejects interfaces carrying zero or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Marker {
	/// Exception/value-returning factory methods.
	Bundle,
	/// Void logging methods dispatched through a logging backend.
	Logger,
}

/// An annotated source interface describing a family of localized messages.
///
/// Parsed externally and read-only to the generation engine. Nested message
/// interfaces record their enclosing interfaces' simple names, outermost
/// first; generated class names join the chain with `$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInterface {
	/// Package the interface is declared in; empty for the default package.
	pub package: String,
	pub simple_name: String,
	/// Simple names of enclosing message interfaces, outermost first.
	pub enclosing: Vec<String>,
	pub markers: BTreeSet<Marker>,
	/// Declared methods, in declaration order. Order is significant for
	/// reproducible output.
	pub methods: Vec<MessageMethod>,
}

impl MessageInterface {
	pub fn is_annotated_with(&self, marker: Marker) -> bool {
		self.markers.contains(&marker)
	}

	/// Nesting-aware name in `Outer$Inner` form.
	pub fn nested_name(&self) -> String {
		let mut name = String::new();
		for enclosing in &self.enclosing {
			name.push_str(enclosing);
			name.push('$');
		}
		name.push_str(&self.simple_name);
		name
	}

	/// Fully qualified source name, e.g. `com.example.Outer.Inner`.
	pub fn qualified_name(&self) -> String {
		let mut name = String::new();
		if !self.package.is_empty() {
			name.push_str(&self.package);
			name.push('.');
		}
		for enclosing in &self.enclosing {
			name.push_str(enclosing);
			name.push('.');
		}
		name.push_str(&self.simple_name);
		name
	}
}

impl std::fmt::Display for MessageInterface {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.qualified_name())
	}
}
