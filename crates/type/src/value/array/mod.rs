// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, fmt};

use crate::CowHandle;

mod column;

pub use column::ColumnArray;

/// A one-dimensional array of column values.
///
/// The backing buffer lives in a [`CowHandle`], so arrays can be cloned and
/// sliced without copying. A slice is a strided view onto the buffer of the
/// array it was taken from.
pub struct Array<T> {
	data: CowHandle<Vec<T>>,
	offset: usize,
	len: usize,
	step: usize,
}

impl<T> Array<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self::from_handle(CowHandle::new(data))
	}

	/// An array covering the whole buffer of `data`.
	pub fn from_handle(data: CowHandle<Vec<T>>) -> Self {
		let len = data.len();
		Self {
			data,
			offset: 0,
			len,
			step: 1,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		if idx >= self.len {
			return None;
		}
		self.data.get(self.offset + idx * self.step)
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		(0..self.len).map(move |idx| &self.data[self.offset + idx * self.step])
	}

	/// True when the array covers its whole buffer in order.
	pub fn is_contiguous(&self) -> bool {
		self.offset == 0 && self.step == 1 && self.len == self.data.len()
	}

	/// A strided view of `len` elements starting at `start`, sharing storage
	/// with this array.
	pub fn slice(&self, start: usize, len: usize, step: usize) -> Option<Self> {
		if step == 0 {
			return None;
		}
		if len > 0 {
			let last = (len - 1).checked_mul(step)?.checked_add(start)?;
			if last >= self.len {
				return None;
			}
		}
		Some(Self {
			data: self.data.share_read_only(),
			offset: start.checked_mul(self.step)?.checked_add(self.offset)?,
			len,
			step: self.step.checked_mul(step)?,
		})
	}

	/// A read-only handle on the backing buffer, only available when the
	/// array covers exactly that buffer.
	pub fn share_storage(&self) -> Option<CowHandle<Vec<T>>> {
		self.is_contiguous().then(|| self.data.share_read_only())
	}

	pub fn handle(&self) -> &CowHandle<Vec<T>> {
		&self.data
	}
}

impl<T: Clone> Array<T> {
	pub fn to_vec(&self) -> Vec<T> {
		self.iter().cloned().collect()
	}

	/// Contiguous storage of the array values.
	///
	/// Borrows the backing buffer when the array already covers it, otherwise
	/// returns a freshly owned copy. The caller decides whether to keep that
	/// copy as a new array.
	pub fn storage(&self) -> Cow<'_, [T]> {
		if self.is_contiguous() {
			Cow::Borrowed(self.data.as_slice())
		} else {
			Cow::Owned(self.to_vec())
		}
	}

	/// Mutable contiguous storage, compacting a strided view and copying a
	/// shared buffer first.
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		if !self.is_contiguous() {
			*self = Self::new(self.to_vec());
		}
		self.data.make_mut().as_mut_slice()
	}

	pub fn set(&mut self, idx: usize, value: T) -> bool {
		match self.as_mut_slice().get_mut(idx) {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}
}

impl<T> Clone for Array<T> {
	fn clone(&self) -> Self {
		Self {
			data: self.data.clone(),
			offset: self.offset,
			len: self.len,
			step: self.step,
		}
	}
}

impl<T: PartialEq> PartialEq for Array<T> {
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && self.iter().zip(other.iter()).all(|(l, r)| l == r)
	}
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T> From<Vec<T>> for Array<T> {
	fn from(value: Vec<T>) -> Self {
		Self::new(value)
	}
}

impl<T> Default for Array<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}
