//! Indirect object storage.
//!
//! Objects are numbered contiguously from 1 in allocation order, all with
//! generation 0. Object number 0 is never handed out; it is the head of the
//! free list in the cross-reference table.

use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};

/// An object together with the reference it was registered under.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    /// Reference of the object
    pub reference: ObjectRef,
    /// Object value
    pub value: Object,
}

/// Append-only store of indirect objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectStore {
    objects: Vec<IndirectObject>,
}

impl ObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value and return its reference.
    ///
    /// The returned reference is one greater than the previous allocation
    /// (starting at `1 0 R`).
    pub fn allocate(&mut self, value: Object) -> Result<ObjectRef> {
        let next = u32::try_from(self.objects.len())
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or(Error::StoreExhausted)?;
        let reference = ObjectRef::new(next, 0);
        self.objects.push(IndirectObject { reference, value });
        Ok(reference)
    }

    /// Replace the value stored under `reference`.
    pub fn update(&mut self, reference: ObjectRef, value: Object) -> Result<()> {
        let slot = self.slot(reference)?;
        self.objects[slot].value = value;
        Ok(())
    }

    /// Look up the value stored under `reference`.
    pub fn resolve(&self, reference: ObjectRef) -> Result<&Object> {
        let slot = self.slot(reference)?;
        Ok(&self.objects[slot].value)
    }

    /// Whether `reference` was allocated by this store.
    pub fn contains(&self, reference: ObjectRef) -> bool {
        self.slot(reference).is_ok()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate objects in ascending object-number order.
    pub fn iter(&self) -> impl Iterator<Item = &IndirectObject> {
        self.objects.iter()
    }

    fn slot(&self, reference: ObjectRef) -> Result<usize> {
        if reference.gen != 0 || reference.id == 0 {
            return Err(Error::ObjectNotFound(reference));
        }
        let slot = (reference.id - 1) as usize;
        if slot < self.objects.len() {
            Ok(slot)
        } else {
            Err(Error::ObjectNotFound(reference))
        }
    }
}
