// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default-locale implementation synthesis.

use herald_model::{MessageInterface, MessageMethod, ReturnKind};

use crate::class_model::{ClassModel, MethodBody, MethodBodyKind};
use crate::error::{CodegenError, Result};
use crate::naming::{implementation_class_name, ClassNameSuffix};
use crate::strategy::Strategy;

/// Builds the class model for the default-locale implementation.
///
/// The model is complete: one body per interface method, in declaration
/// order, with nothing left to inheritance.
pub fn implementation(interface: &MessageInterface) -> Result<ClassModel> {
	let strategy = Strategy::select(interface)?;
	let class_name = implementation_class_name(interface, &ClassNameSuffix::Implementation);
	tracing::debug!(
		interface = %interface,
		class = %class_name,
		strategy = ?strategy,
		methods = interface.methods.len(),
		"building implementation class model"
	);
	let methods = interface
		.methods
		.iter()
		.map(|method| method_body(strategy, method, &method.message))
		.collect::<Result<Vec<_>>>()?;
	Ok(ClassModel {
		class_name,
		interface_name: interface.qualified_name(),
		superclass_name: None,
		locale: None,
		strategy,
		methods,
	})
}

/// Synthesizes one method body under the given strategy.
///
/// Shared by the implementors and translators; translations substitute the
/// translated text for the declared message, the shape is identical.
pub(crate) fn method_body(
	strategy: Strategy,
	method: &MessageMethod,
	message: &str,
) -> Result<MethodBody> {
	let unsupported = |reason: &str| CodegenError::UnsupportedMethodShape {
		method: method.signature(),
		reason: reason.to_string(),
	};
	let mut causes = method.cause_parameters();
	let cause_param = causes.next().map(|p| p.name.clone());
	if causes.next().is_some() {
		return Err(unsupported("more than one parameter is marked as the cause"));
	}
	let kind = match strategy {
		Strategy::Bundle => {
			if method.level.is_some() {
				return Err(unsupported("bundle method carries a log level"));
			}
			if method.return_kind == ReturnKind::Void {
				return Err(unsupported("bundle method must return a message or a throwable"));
			}
			MethodBodyKind::BundleFactory {
				return_kind: method.return_kind.clone(),
				cause_param,
			}
		}
		Strategy::Logger => {
			if method.return_kind != ReturnKind::Void {
				return Err(unsupported("logger method must return void"));
			}
			let level = method.level.ok_or_else(|| unsupported("logger method has no log level"))?;
			MethodBodyKind::LoggerCall { level, cause_param }
		}
	};
	Ok(MethodBody {
		name: method.name.clone(),
		parameters: method.parameters.clone(),
		message: message.to_string(),
		kind,
	})
}
