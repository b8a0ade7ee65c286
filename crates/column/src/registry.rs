// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tabula_type::{ColumnValue, PrimitiveKind, diagnostic::column, dispatch_primitive, return_error};
use tracing::{debug, instrument, warn};

use crate::{
	codec::ValueCodec,
	desc::{
		ArrayColumn, ColumnDescriptor, SCALAR_RECORD_TAG, SUB_TABLE_TAG, ScalarColumn, ScalarRecordColumn,
		SubTableColumn,
	},
};

/// Builds an empty descriptor variant for the tag it is invoked with.
pub type ColumnDescCtor = Arc<dyn Fn(&str) -> crate::Result<Box<dyn ColumnDescriptor>> + Send + Sync>;

struct Registry {
	ctors: HashMap<String, ColumnDescCtor>,
	fallback: ColumnDescCtor,
}

impl Registry {
	fn builtin() -> Self {
		let mut ctors: HashMap<String, ColumnDescCtor> = HashMap::new();

		for kind in PrimitiveKind::ALL {
			dispatch_primitive!(kind, T => {
				ctors.insert(ScalarColumn::<T>::tag(), Arc::new(scalar_ctor::<T>));
				ctors.insert(ArrayColumn::<T>::tag(), Arc::new(array_ctor::<T>));
			});
		}

		ctors.insert(SUB_TABLE_TAG.to_string(), Arc::new(sub_table_ctor));
		ctors.insert(SCALAR_RECORD_TAG.to_string(), Arc::new(scalar_record_ctor));

		debug!(count = ctors.len(), "registered built-in column descriptor kinds");

		Self {
			ctors,
			fallback: Arc::new(unknown_descriptor),
		}
	}
}

fn scalar_ctor<T: ColumnValue + ValueCodec>(_: &str) -> crate::Result<Box<dyn ColumnDescriptor>> {
	Ok(Box::new(ScalarColumn::<T>::new("")))
}

fn array_ctor<T: ColumnValue + ValueCodec>(_: &str) -> crate::Result<Box<dyn ColumnDescriptor>> {
	Ok(Box::new(ArrayColumn::<T>::new("", -1)))
}

fn sub_table_ctor(_: &str) -> crate::Result<Box<dyn ColumnDescriptor>> {
	Ok(Box::new(SubTableColumn::new("", "", Vec::new())))
}

fn scalar_record_ctor(_: &str) -> crate::Result<Box<dyn ColumnDescriptor>> {
	Ok(Box::new(ScalarRecordColumn::new("")))
}

fn unknown_descriptor(tag: &str) -> crate::Result<Box<dyn ColumnDescriptor>> {
	return_error!(column::unknown_descriptor_kind(tag))
}

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::builtin()));

/// Process-wide map from descriptor tag to constructor.
///
/// The built-in kinds are registered the first time the registry is used.
/// The lock is only held while the map is read or written, never while a
/// constructor runs.
pub struct ColumnRegistry;

impl ColumnRegistry {
	/// Registers `ctor` under `tag`, replacing any constructor registered
	/// before.
	pub fn register<F>(tag: impl Into<String>, ctor: F)
	where
		F: Fn(&str) -> crate::Result<Box<dyn ColumnDescriptor>> + Send + Sync + 'static,
	{
		let tag = tag.into();
		let mut registry = REGISTRY.lock();
		if registry.ctors.insert(tag.clone(), Arc::new(ctor)).is_some() {
			warn!(tag = %tag, "replaced column descriptor constructor");
		} else {
			debug!(tag = %tag, "registered column descriptor constructor");
		}
	}

	/// The constructor for `tag`, or the fallback that fails with an
	/// unknown descriptor kind error. Never adds an entry.
	#[instrument(name = "column::registry::lookup", level = "trace")]
	pub fn lookup(tag: &str) -> ColumnDescCtor {
		let registry = REGISTRY.lock();
		match registry.ctors.get(tag) {
			Some(ctor) => Arc::clone(ctor),
			None => Arc::clone(&registry.fallback),
		}
	}

	/// Looks up and invokes the constructor for `tag`.
	pub fn create(tag: &str) -> crate::Result<Box<dyn ColumnDescriptor>> {
		let ctor = Self::lookup(tag);
		ctor(tag)
	}

	pub fn is_registered(tag: &str) -> bool {
		REGISTRY.lock().ctors.contains_key(tag)
	}

	/// All registered tags in sorted order.
	pub fn tags() -> Vec<String> {
		let mut tags: Vec<String> = REGISTRY.lock().ctors.keys().cloned().collect();
		tags.sort();
		tags
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ColumnDesc;

	#[test]
	fn test_builtin_tags() {
		let tags = ColumnRegistry::tags();
		assert!(tags.len() >= 26);
		for tag in ["ScalarColumn<Int>", "ArrayColumn<DComplex>", "SubTableColumn", "ScalarRecordColumn"] {
			assert!(ColumnRegistry::is_registered(tag), "{tag} not registered");
		}
	}

	fn builtin_tags() -> Vec<String> {
		let mut tags: Vec<String> = Registry::builtin().ctors.into_keys().collect();
		tags.sort();
		tags
	}

	#[test]
	fn test_builtins_report_their_tag() {
		let builtin = builtin_tags();
		assert_eq!(builtin.len(), 26);
		for tag in builtin {
			let column = ColumnRegistry::create(&tag).unwrap();
			assert_eq!(column.class_name(), tag);
		}
	}

	#[test]
	fn test_concurrent_register_and_lookup() {
		const THREADS: usize = 8;
		const PER_THREAD: usize = 16;

		let builtin = builtin_tags();
		std::thread::scope(|scope| {
			for thread in 0..THREADS {
				let builtin = &builtin;
				scope.spawn(move || {
					for i in 0..PER_THREAD {
						ColumnRegistry::register(format!("ConcurrentColumn{thread}_{i}"), |_| {
							Ok(Box::new(ScalarRecordColumn::new("concurrent")) as Box<dyn ColumnDescriptor>)
						});
						for tag in builtin {
							assert_eq!(ColumnRegistry::lookup(tag)(tag).unwrap().class_name(), *tag);
						}
						assert!(ColumnRegistry::create("SubTableColumn").is_ok());
					}
				});
			}
		});

		let tags = ColumnRegistry::tags();
		for tag in &builtin {
			assert!(tags.contains(tag), "{tag} missing");
		}
		let added = tags.iter().filter(|tag| tag.starts_with("ConcurrentColumn")).count();
		assert_eq!(added, THREADS * PER_THREAD);
		for thread in 0..THREADS {
			for i in 0..PER_THREAD {
				let column = ColumnRegistry::create(&format!("ConcurrentColumn{thread}_{i}")).unwrap();
				assert_eq!(column.base().name, "concurrent");
			}
		}
	}

	#[test]
	fn test_unknown_tag_uses_fallback() {
		let err = ColumnRegistry::create("BogusColumn").unwrap_err();
		assert_eq!(err.code, "COLUMN_001");
		assert!(err.message.contains("BogusColumn"));
		assert!(!ColumnRegistry::is_registered("BogusColumn"));
	}

	#[test]
	fn test_register_custom_kind() {
		ColumnRegistry::register("RegistryTestColumn", |_| {
			Ok(Box::new(ScalarRecordColumn::new("custom")) as Box<dyn ColumnDescriptor>)
		});
		assert!(ColumnRegistry::is_registered("RegistryTestColumn"));

		let column = ColumnDesc::new(ColumnRegistry::create("RegistryTestColumn").unwrap());
		assert_eq!(column.name(), "custom");
	}
}
