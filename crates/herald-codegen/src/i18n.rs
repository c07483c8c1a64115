// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! I18n aggregator synthesis.

use herald_model::{MessageInterface, TranslationsByLocale};

use crate::class_model::{InterfaceModel, LocaleRoute, RoutedMethod};
use crate::error::Result;
use crate::naming::{implementation_class_name, ClassNameSuffix, LocaleSuffix};
use crate::strategy::Strategy;
use crate::translator::validate_translation_keys;

/// Builds the interface model for the i18n aggregator.
///
/// The aggregator routes each call, by runtime-supplied locale, to the
/// matching translation class; locales without a route fall back to the
/// default-locale implementation, so every method is resolvable for every
/// possible runtime locale. `translations_by_locale` must cover every locale
/// a translation class is generated for in this round.
pub fn translation_i18n(
	interface: &MessageInterface,
	translations_by_locale: &TranslationsByLocale,
) -> Result<InterfaceModel> {
	let strategy = Strategy::select(interface)?;
	let class_name = implementation_class_name(interface, &ClassNameSuffix::I18n);
	let fallback_class_name =
		implementation_class_name(interface, &ClassNameSuffix::Implementation);
	tracing::debug!(
		interface = %interface,
		class = %class_name,
		strategy = ?strategy,
		locales = translations_by_locale.len(),
		"building i18n aggregator model"
	);
	let mut routes = Vec::with_capacity(translations_by_locale.len());
	for (suffix, translations) in translations_by_locale {
		let locale_suffix = LocaleSuffix::parse(suffix)?;
		validate_translation_keys(interface, translations)?;
		routes.push(LocaleRoute {
			locale: locale_suffix.locale(),
			class_name: implementation_class_name(
				interface,
				&ClassNameSuffix::Locale(locale_suffix),
			),
		});
	}
	let methods = interface
		.methods
		.iter()
		.map(|method| RoutedMethod {
			name: method.name.clone(),
			parameters: method.parameters.clone(),
		})
		.collect();
	Ok(InterfaceModel {
		class_name,
		interface_name: interface.qualified_name(),
		strategy,
		fallback_class_name,
		routes,
		methods,
	})
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use herald_model::{
		LogLevel, Marker, MessageMethod, Parameter, ReturnKind, Translations,
	};

	use super::*;
	use crate::error::CodegenError;

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

	fn translations_for(method: &MessageMethod, text: &str) -> Translations {
		[(method.clone(), text.to_string())].into_iter().collect()
	}

	#[test]
	fn test_aggregator_routes_every_locale() {
		let method = logger_method("starting", "Starting %s");
		let iface = interface(vec![method.clone()]);
		let by_locale: TranslationsByLocale = [
			("_de".to_string(), translations_for(&method, "Starte %s")),
			("_fr".to_string(), translations_for(&method, "Démarrage %s")),
			("_fr_CA".to_string(), translations_for(&method, "Démarrage %s")),
		]
		.into_iter()
		.collect();

		let model = translation_i18n(&iface, &by_locale).unwrap();
		assert_eq!(model.class_name, "com.example.Messages_$i18n");
		assert_eq!(model.fallback_class_name, "com.example.Messages_$impl");
		assert_eq!(model.strategy, Strategy::Logger);

		let routes: Vec<(&str, &str)> = model
			.routes
			.iter()
			.map(|r| (r.locale.as_str(), r.class_name.as_str()))
			.collect();
		assert_eq!(
			routes,
			vec![
				("de", "com.example.Messages_de"),
				("fr", "com.example.Messages_fr"),
				("fr_CA", "com.example.Messages_fr_CA"),
			]
		);

		let names: Vec<&str> = model.methods.iter().map(|m| m.name.as_str()).collect();
		assert_eq!(names, vec!["starting"]);
	}

	#[test]
	fn test_aggregator_with_no_translations_still_falls_back() {
		let iface = interface(vec![logger_method("starting", "Starting %s")]);
		let model = translation_i18n(&iface, &TranslationsByLocale::new()).unwrap();
		assert!(model.routes.is_empty());
		assert_eq!(model.fallback_class_name, "com.example.Messages_$impl");
		assert_eq!(model.methods.len(), 1);
	}

	#[test]
	fn test_aggregator_rejects_unmarked_interface() {
		let mut iface = interface(vec![]);
		iface.markers = BTreeSet::new();
		assert!(matches!(
			translation_i18n(&iface, &TranslationsByLocale::new()),
			Err(CodegenError::InvalidInterfaceKind { .. })
		));
	}

	#[test]
	fn test_aggregator_rejects_malformed_locale_suffix() {
		let method = logger_method("starting", "Starting %s");
		let iface = interface(vec![method.clone()]);
		let by_locale: TranslationsByLocale =
			[("de".to_string(), translations_for(&method, "Starte %s"))].into_iter().collect();
		assert!(matches!(
			translation_i18n(&iface, &by_locale),
			Err(CodegenError::NamingResolution { .. })
		));
	}

	#[test]
	fn test_aggregator_rejects_unknown_translation_keys() {
		let iface = interface(vec![logger_method("starting", "Starting %s")]);
		let stray = logger_method("missing", "");
		let by_locale: TranslationsByLocale =
			[("_de".to_string(), translations_for(&stray, "Fehlt"))].into_iter().collect();
		let err = translation_i18n(&iface, &by_locale).unwrap_err();
		assert!(matches!(err, CodegenError::UnknownTranslationKey { .. }));
	}
}
