// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Generated class naming.
//!
//! Naming is deterministic: the same interface and suffix always produce the
//! same generated name. Callers refer to classes by name before they are
//! emitted, so this is a cross-call invariant, not a convenience.
//!
//! Nested message interfaces join their enclosing chain with `$`
//! (`Outer$Inner_$impl`), and superclass resolution only ever inspects the
//! trailing locale segments, so a nested translation class always extends a
//! class belonging to its own interface, never the enclosing one.

use herald_model::MessageInterface;
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Name suffix of the default-locale implementation class.
pub const IMPL_SUFFIX: &str = "_$impl";

/// Name suffix of the i18n aggregator class. Locale segments never contain
/// `$`, so this can never collide with a translation class name.
pub const I18N_SUFFIX: &str = "_$i18n";

/// Validated locale suffix token: `_xx` or `_xx_YY`.
///
/// The leading underscore is structural; stripping it yields the locale
/// string. Language is two or three lowercase ASCII letters, the optional
/// region two uppercase ASCII letters. Anything else is rejected at parse
/// time; deeper locale validation is the resource reader's problem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocaleSuffix {
	language: String,
	region: Option<String>,
}

impl LocaleSuffix {
	/// Parses a `_xx[_YY]` suffix token.
	pub fn parse(suffix: &str) -> Result<Self> {
		let malformed = |reason: &str| CodegenError::NamingResolution {
			suffix: suffix.to_string(),
			reason: reason.to_string(),
		};
		let rest = suffix
			.strip_prefix('_')
			.ok_or_else(|| malformed("missing leading separator"))?;
		if rest.is_empty() {
			return Err(malformed("missing locale code"));
		}
		let mut segments = rest.split('_');
		let language = segments.next().unwrap_or_default();
		if !is_language_segment(language) {
			return Err(malformed("language must be two or three lowercase letters"));
		}
		let region = match segments.next() {
			Some(region) if is_region_segment(region) => Some(region.to_string()),
			Some(_) => return Err(malformed("region must be two uppercase letters")),
			None => None,
		};
		if segments.next().is_some() {
			return Err(malformed("too many locale segments"));
		}
		Ok(LocaleSuffix {
			language: language.to_string(),
			region,
		})
	}

	/// Locale string without the leading separator: `fr`, `fr_CA`.
	pub fn locale(&self) -> String {
		match &self.region {
			Some(region) => format!("{}_{}", self.language, region),
			None => self.language.clone(),
		}
	}

	/// Full suffix token including the leading separator: `_fr`, `_fr_CA`.
	pub fn token(&self) -> String {
		format!("_{}", self.locale())
	}
}

impl std::fmt::Display for LocaleSuffix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.token())
	}
}

/// Name suffix selecting which generated class of an interface to name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassNameSuffix {
	/// The default-locale implementation (`Messages_$impl`).
	Implementation,
	/// A locale-specific translation subclass (`Messages_de`).
	Locale(LocaleSuffix),
	/// The i18n aggregator (`Messages_$i18n`).
	I18n,
}

/// Derives the package-qualified generated class name for an interface.
///
/// Idempotent for a given interface identity and suffix. Sibling interfaces
/// with the same simple name in different packages stay distinct because the
/// package qualifies the name.
pub fn implementation_class_name(interface: &MessageInterface, suffix: &ClassNameSuffix) -> String {
	let mut name = String::new();
	if !interface.package.is_empty() {
		name.push_str(&interface.package);
		name.push('.');
	}
	name.push_str(&interface.nested_name());
	match suffix {
		ClassNameSuffix::Implementation => name.push_str(IMPL_SUFFIX),
		ClassNameSuffix::Locale(locale) => name.push_str(&locale.token()),
		ClassNameSuffix::I18n => name.push_str(I18N_SUFFIX),
	}
	name
}

/// Derives the name of the class a translation class must extend.
///
/// Exactly one trailing locale segment is stripped per step: a region
/// translation extends the language translation (`X_fr_CA` -> `X_fr`), a
/// language translation extends the base implementation (`X_fr` ->
/// `X_$impl`). Only the portion after the last `$` nesting separator is
/// inspected, so `Outer$Inner_fr` resolves to `Outer$Inner_$impl`.
pub fn enclosing_translation_class_name(generated_class_name: &str) -> Result<String> {
	let malformed = |reason: &str| CodegenError::NamingResolution {
		suffix: generated_class_name.to_string(),
		reason: reason.to_string(),
	};
	let tail_start = generated_class_name.rfind('$').map_or(0, |i| i + 1);
	let (prefix, tail) = generated_class_name.split_at(tail_start);
	match tail.rsplit_once('_') {
		Some((head, segment)) if is_region_segment(segment) => {
			let has_language = head
				.rsplit_once('_')
				.is_some_and(|(_, language)| is_language_segment(language));
			if !has_language {
				return Err(malformed("region segment without a language segment"));
			}
			Ok(format!("{prefix}{head}"))
		}
		Some((head, segment)) if is_language_segment(segment) => {
			Ok(format!("{prefix}{head}{IMPL_SUFFIX}"))
		}
		_ => Err(malformed("no trailing locale segment")),
	}
}

fn is_language_segment(segment: &str) -> bool {
	(2..=3).contains(&segment.len()) && segment.chars().all(|c| c.is_ascii_lowercase())
}

fn is_region_segment(segment: &str) -> bool {
	segment.len() == 2 && segment.chars().all(|c| c.is_ascii_uppercase())
}
