// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Generation strategy classification.

use herald_model::{Marker, MessageInterface};
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Which family of implementations to generate for an interface.
///
/// Classified once from the interface's marker annotations and threaded
/// through every generation entry point; downstream synthesis is
/// strategy-specific and has no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
	/// Exception/value-returning factory methods.
	Bundle,
	/// Void logging methods forwarded to a logging backend.
	Logger,
}

impl Strategy {
	/// Classifies an interface by its marker annotations.
	///
	/// Exactly one of the two markers must be present; zero or both is an
	/// invalid interface kind and fails before any naming or method
	/// synthesis is attempted.
	pub fn select(interface: &MessageInterface) -> Result<Self> {
		let bundle = interface.is_annotated_with(Marker::Bundle);
		let logger = interface.is_annotated_with(Marker::Logger);
		match (bundle, logger) {
			(true, false) => Ok(Strategy::Bundle),
			(false, true) => Ok(Strategy::Logger),
			_ => Err(CodegenError::InvalidInterfaceKind {
				interface: interface.qualified_name(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use super::*;

	fn interface(markers: BTreeSet<Marker>) -> MessageInterface {
		MessageInterface {
			package: "com.example".to_string(),
			simple_name: "Messages".to_string(),
			enclosing: vec![],
			markers,
			methods: vec![],
		}
	}

	#[test]
	fn test_select_bundle() {
		let iface = interface(BTreeSet::from([Marker::Bundle]));
		assert_eq!(Strategy::select(&iface).unwrap(), Strategy::Bundle);
	}

	#[test]
	fn test_select_logger() {
		let iface = interface(BTreeSet::from([Marker::Logger]));
		assert_eq!(Strategy::select(&iface).unwrap(), Strategy::Logger);
	}

	#[test]
	fn test_select_no_markers() {
		let iface = interface(BTreeSet::new());
		let err = Strategy::select(&iface).unwrap_err();
		assert_eq!(
			err,
			CodegenError::InvalidInterfaceKind {
				interface: "com.example.Messages".to_string(),
			}
		);
	}

	#[test]
	fn test_select_both_markers() {
		let iface = interface(BTreeSet::from([Marker::Bundle, Marker::Logger]));
		assert!(matches!(
			Strategy::select(&iface),
			Err(CodegenError::InvalidInterfaceKind { .. })
		));
	}
}
