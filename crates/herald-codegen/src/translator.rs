// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-specific translation subclass synthesis.

use herald_model::{MessageInterface, Translations};

use crate::class_model::ClassModel;
use crate::error::{CodegenError, Result};
use crate::implementor::method_body;
use crate::naming::{
	enclosing_translation_class_name, implementation_class_name, ClassNameSuffix, LocaleSuffix,
};
use crate::strategy::Strategy;

/// Builds the class model for one locale's translation subclass.
///
/// Only translated methods are emitted; everything else is inherited from
/// the superclass, so a translation covering a subset of the interface stays
/// minimal and untranslated methods keep tracking the default message.
///
/// The base implementation for `interface` must be generated before or in
/// the same pass; the superclass is referenced by name only.
pub fn translation(
	interface: &MessageInterface,
	suffix: &str,
	translations: &Translations,
) -> Result<ClassModel> {
	let strategy = Strategy::select(interface)?;
	let locale_suffix = LocaleSuffix::parse(suffix)?;
	validate_translation_keys(interface, translations)?;
	let class_name =
		implementation_class_name(interface, &ClassNameSuffix::Locale(locale_suffix.clone()));
	let superclass_name = enclosing_translation_class_name(&class_name)?;
	let locale = locale_suffix.locale();
	tracing::debug!(
		interface = %interface,
		class = %class_name,
		superclass = %superclass_name,
		locale = %locale,
		overridden = translations.len(),
		"building translation class model"
	);
	if translations.is_empty() {
		tracing::warn!(interface = %interface, locale = %locale, "translation overrides no methods");
	}
	let methods = interface
		.methods
		.iter()
		.filter_map(|method| {
			translations
				.get(method)
				.map(|text| method_body(strategy, method, text))
		})
		.collect::<Result<Vec<_>>>()?;
	Ok(ClassModel {
		class_name,
		interface_name: interface.qualified_name(),
		superclass_name: Some(superclass_name),
		locale: Some(locale),
		strategy,
		methods,
	})
}

/// Rejects translation keys that do not name a method on the interface.
pub(crate) fn validate_translation_keys(
	interface: &MessageInterface,
	translations: &Translations,
) -> Result<()> {
	for method in translations.keys() {
		if !interface.methods.iter().any(|declared| declared == method) {
			return Err(CodegenError::UnknownTranslationKey {
				interface: interface.qualified_name(),
				method: method.signature(),
			});
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use herald_model::{LogLevel, Marker, MessageMethod, Parameter, ReturnKind};

	use super::*;

	fn logger_method(name: &str, message: &str) -> MessageMethod {
		MessageMethod {
			name: name.to_string(),
			parameters: vec![Parameter {
				name: "msg".to_string(),
				type_name: "String".to_string(),
				is_cause: false,
			}],
			message: message.to_string(),
			level: Some(LogLevel::Info),
			return_kind: ReturnKind::Void,
		}
	}

	fn interface(methods: Vec<MessageMethod>) -> MessageInterface {
		MessageInterface {
			package: "com.example".to_string(),
			simple_name: "Messages".to_string(),
			enclosing: vec![],
			markers: BTreeSet::from([Marker::Logger]),
			methods,
		}
	}

	#[test]
	fn test_translation_emits_only_translated_methods() {
		let iface = interface(vec![
			logger_method("starting", "Starting %s"),
			logger_method("stopping", "Stopping %s"),
			logger_method("restarting", "Restarting %s"),
		]);
		let translations: Translations = [
			(logger_method("stopping", ""), "Anhalten %s".to_string()),
			(logger_method("starting", ""), "Starte %s".to_string()),
		]
		.into_iter()
		.collect();

		let model = translation(&iface, "_de", &translations).unwrap();
		assert_eq!(model.class_name, "com.example.Messages_de");
		assert_eq!(model.superclass_name.as_deref(), Some("com.example.Messages_$impl"));
		assert_eq!(model.locale.as_deref(), Some("de"));

		// Declaration order, not map order; untranslated methods absent.
		let names: Vec<&str> = model.methods.iter().map(|m| m.name.as_str()).collect();
		assert_eq!(names, vec!["starting", "stopping"]);
		assert_eq!(model.methods[0].message, "Starte %s");
		assert_eq!(model.methods[1].message, "Anhalten %s");
	}

	#[test]
	fn test_region_translation_extends_language_translation() {
		let iface = interface(vec![logger_method("starting", "Starting %s")]);
		let translations: Translations =
			[(logger_method("starting", ""), "Démarrage %s".to_string())].into_iter().collect();
		let model = translation(&iface, "_fr_CA", &translations).unwrap();
		assert_eq!(model.class_name, "com.example.Messages_fr_CA");
		assert_eq!(model.superclass_name.as_deref(), Some("com.example.Messages_fr"));
		assert_eq!(model.locale.as_deref(), Some("fr_CA"));
	}

	#[test]
	fn test_nested_translation_extends_nested_base() {
		let mut iface = interface(vec![logger_method("starting", "Starting %s")]);
		iface.simple_name = "Inner".to_string();
		iface.enclosing = vec!["Outer".to_string()];
		let translations: Translations =
			[(logger_method("starting", ""), "Starte %s".to_string())].into_iter().collect();
		let model = translation(&iface, "_de", &translations).unwrap();
		assert_eq!(model.class_name, "com.example.Outer$Inner_de");
		assert_eq!(
			model.superclass_name.as_deref(),
			Some("com.example.Outer$Inner_$impl")
		);
	}

	#[test]
	fn test_unknown_translation_key_is_rejected() {
		let iface = interface(vec![logger_method("starting", "Starting %s")]);
		let translations: Translations =
			[(logger_method("missing", ""), "Fehlt %s".to_string())].into_iter().collect();
		let err = translation(&iface, "_de", &translations).unwrap_err();
		assert_eq!(
			err,
			CodegenError::UnknownTranslationKey {
				interface: "com.example.Messages".to_string(),
				method: "missing(String)".to_string(),
			}
		);
	}

	#[test]
	fn test_malformed_suffix_is_rejected() {
		let iface = interface(vec![logger_method("starting", "Starting %s")]);
		let err = translation(&iface, "de", &Translations::new()).unwrap_err();
		assert!(matches!(err, CodegenError::NamingResolution { .. }));
	}

	#[test]
	fn test_unmarked_interface_fails_before_naming() {
		let mut iface = interface(vec![]);
		iface.markers = BTreeSet::new();
		// Malformed suffix as well, but the interface kind wins.
		let err = translation(&iface, "de", &Translations::new()).unwrap_err();
		assert!(matches!(err, CodegenError::InvalidInterfaceKind { .. }));
	}

	#[test]
	fn test_empty_translations_make_empty_subclass() {
		let iface = interface(vec![logger_method("starting", "Starting %s")]);
		let model = translation(&iface, "_de", &Translations::new()).unwrap();
		assert!(model.methods.is_empty());
	}
}
