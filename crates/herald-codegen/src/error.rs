// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for code generation.

use thiserror::Error;

/// Result type for code generation operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while building class models.
///
/// All generation is pure and deterministic, so the same input always fails
/// the same way; callers are expected to surface these as compile-time
/// diagnostics rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
	#[error("message interface {interface} is not a valid message bundle or message logger")]
	InvalidInterfaceKind { interface: String },

	#[error("invalid locale suffix {suffix:?}: {reason}")]
	NamingResolution { suffix: String, reason: String },

	#[error("translation key {method} does not match any method on {interface}")]
	UnknownTranslationKey { interface: String, method: String },

	#[error("method {method} cannot be generated: {reason}")]
	UnsupportedMethodShape { method: String, reason: String },
}
