// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{fmt, ops::Deref, sync::Arc};

/// Shared, copy-on-write handle to a value.
///
/// Any number of handles may read the same value. A handle that wants to
/// write must go through [`CowHandle::make_mut`], which calls
/// [`CowHandle::ensure_unique`] first. A handle marked read-only never
/// writes to its current value, even when it is the sole holder.
pub struct CowHandle<T> {
	value: Arc<T>,
	read_only: bool,
}

impl<T> CowHandle<T> {
	/// Takes ownership of `value`; the handle is writable.
	pub fn new(value: T) -> Self {
		Self::construct(value, false)
	}

	/// Takes ownership of `value`.
	pub fn construct(value: T, read_only: bool) -> Self {
		Self {
			value: Arc::new(value),
			read_only,
		}
	}

	/// Adopts a value owned elsewhere. The handle shares it and copies before
	/// the first write.
	pub fn from_shared(value: Arc<T>, read_only: bool) -> Self {
		Self {
			value,
			read_only,
		}
	}

	pub fn set(&mut self, value: T, read_only: bool) {
		self.value = Arc::new(value);
		self.read_only = read_only;
	}

	pub fn set_shared(&mut self, value: Arc<T>, read_only: bool) {
		self.value = value;
		self.read_only = read_only;
	}

	/// A second handle on the same storage that will never write to it.
	pub fn share_read_only(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
			read_only: true,
		}
	}

	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	/// Number of handles (and other owners) currently sharing the value.
	pub fn ref_count(&self) -> usize {
		Arc::strong_count(&self.value)
	}

	pub fn is_unique(&self) -> bool {
		!self.read_only && Arc::strong_count(&self.value) == 1
	}

	pub fn as_ptr(&self) -> *const T {
		Arc::as_ptr(&self.value)
	}

	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.value, &other.value)
	}
}

impl<T: Clone + Default> CowHandle<T> {
	/// Makes this handle the exclusive, writable owner of its value.
	///
	/// Returns `true` when a copy had to be made. The copy is a fresh default
	/// value assigned from the current one, so types whose assignment differs
	/// from construction get value semantics.
	pub fn ensure_unique(&mut self) -> bool {
		if self.is_unique() {
			return false;
		}

		let mut fresh = T::default();
		fresh.clone_from(&self.value);
		self.value = Arc::new(fresh);
		self.read_only = false;
		true
	}

	/// Mutable access to the value, copying first if it is shared.
	pub fn make_mut(&mut self) -> &mut T {
		self.ensure_unique();
		// unique at this point, so this never clones
		Arc::make_mut(&mut self.value)
	}

	/// Takes the value out, copying only if it is shared.
	pub fn into_inner(self) -> T {
		Arc::try_unwrap(self.value).unwrap_or_else(|shared| (*shared).clone())
	}
}

impl<T> Clone for CowHandle<T> {
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
			read_only: self.read_only,
		}
	}
}

impl<T> Deref for CowHandle<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.value
	}
}

impl<T: Default> Default for CowHandle<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: PartialEq> PartialEq for CowHandle<T> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.value, &other.value) || self.value == other.value
	}
}

impl<T: fmt::Debug> fmt::Debug for CowHandle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CowHandle")
			.field("value", &self.value)
			.field("read_only", &self.read_only)
			.field("ref_count", &Arc::strong_count(&self.value))
			.finish()
	}
}
