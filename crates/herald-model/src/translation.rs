// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation map types.
//!
//! Translation resources are read and parsed externally; the engine receives
//! them as method-keyed maps. `BTreeMap` keeps iteration deterministic, which
//! generated output relies on.

use std::collections::BTreeMap;

use crate::method::MessageMethod;

/// Translated message text per method, for one locale.
///
/// Keys are matched against interface methods by structural signature. The
/// map may cover a strict subset of an interface's methods; keys naming
/// methods absent from the interface are rejected by the engine.
pub type Translations = BTreeMap<MessageMethod, String>;

/// Translation maps keyed by locale suffix token (`_de`, `_fr_CA`, ...).
pub type TranslationsByLocale = BTreeMap<String, Translations>;
