//! Field-level copy helpers shared by every resource model.
//!
//! Responsibilities:
//! - Whole-value copy of flat `Copy` structs.
//! - Copy of optional fields, keeping `None` as `None`.
//! - Copy of nil-able sequences, keeping `None` distinct from `Some(vec![])`.
//!
//! Does NOT handle:
//! - Composite ordering (each model's `Clone` impl calls these in field order).
//!
//! Invariants:
//! - The destination never shares storage with the source after a copy.
//! - Existing destination storage is reused when the source is present, so
//!   `clone_from` on a warm destination avoids reallocating.

/// Copy a flat value by assignment.
pub fn copy_value<T: Copy>(dst: &mut T, src: &T) {
    *dst = *src;
}

/// Copy an optional field whose payload is `Copy`.
pub fn copy_optional_value<T: Copy>(dst: &mut Option<T>, src: &Option<T>) {
    copy_value(dst, src);
}

/// Copy an optional field, recursing into the payload when present.
pub fn copy_optional<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
    let Some(value) = src else {
        *dst = None;
        return;
    };
    match dst {
        Some(out) => out.clone_from(value),
        None => *dst = Some(value.clone()),
    }
}

/// Copy a nil-able sequence element by element.
pub fn copy_sequence<T: Clone>(dst: &mut Option<Vec<T>>, src: &Option<Vec<T>>) {
    let Some(items) = src else {
        *dst = None;
        return;
    };
    match dst {
        Some(out) => copy_elements(out, items),
        None => *dst = Some(items.clone()),
    }
}

fn copy_elements<T: Clone>(out: &mut Vec<T>, items: &[T]) {
    out.truncate(items.len());
    let (head, tail) = items.split_at(out.len());
    for (slot, item) in out.iter_mut().zip(head) {
        slot.clone_from(item);
    }
    out.extend(tail.iter().cloned());
}
