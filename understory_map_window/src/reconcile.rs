// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval reconciliation: the minimal edit script between two visible windows.
//!
//! A render target that mirrors a window `[start, end)` holds one element per
//! index, sorted ascending. When the window moves, [`reconcile`] describes how
//! to turn the old list into the new one without touching elements whose index
//! stays visible:
//!
//! ```text
//! previous:        [ 0  1  2  3  4  5  6  7 ]
//! current:               [ 2  3  4  5  6  7  8  9 ]
//! script:   RemoveAt(0) RemoveAt(0)           AppendBatch([8, 10))
//! ```
//!
//! All removals come first and are addressed by position in the list as it is
//! at that point of the script: tail removals walk inward from the end, head
//! removals always take position `0`. Insertions follow as at most one
//! prepended and one appended batch, each in ascending index order.

use alloc::vec::Vec;

use smallvec::SmallVec;
use understory_map_view::MapInterval;

use crate::error::WindowError;
use crate::target::RenderTarget;

/// One step of an [`EditScript`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// Remove the element currently at `position`.
    RemoveAt {
        /// Position in the target when this step is applied.
        position: usize,
        /// The map index the removed element represents.
        index: i32,
    },
    /// Insert elements for every index of the interval, ascending, before the
    /// first element.
    PrependBatch(MapInterval),
    /// Insert elements for every index of the interval, ascending, after the
    /// last element.
    AppendBatch(MapInterval),
}

impl EditOp {
    /// Returns `true` for [`EditOp::RemoveAt`].
    #[must_use]
    pub fn is_removal(&self) -> bool {
        matches!(self, Self::RemoveAt { .. })
    }
}

/// Ordered edit operations transforming a target from one window to another.
///
/// Built by [`reconcile`]. Removals always precede insertions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditScript {
    previous: MapInterval,
    current: MapInterval,
    ops: SmallVec<[EditOp; 4]>,
}

impl EditScript {
    /// The window the script starts from.
    #[must_use]
    pub fn previous(&self) -> MapInterval {
        self.previous
    }

    /// The window the script produces.
    #[must_use]
    pub fn current(&self) -> MapInterval {
        self.current
    }

    /// The operations, in application order.
    #[must_use]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if applying the script changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The removal steps.
    pub fn removals(&self) -> impl Iterator<Item = &EditOp> + '_ {
        self.ops.iter().filter(|op| op.is_removal())
    }

    /// The insertion steps.
    pub fn insertions(&self) -> impl Iterator<Item = &EditOp> + '_ {
        self.ops.iter().filter(|op| !op.is_removal())
    }

    /// Map indices removed by the script, in removal order.
    pub fn removed_indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.ops.iter().filter_map(|op| match op {
            EditOp::RemoveAt { index, .. } => Some(*index),
            _ => None,
        })
    }

    /// Number of elements the script removes.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removals().count()
    }

    /// Number of elements the script creates.
    #[must_use]
    pub fn inserted_count(&self) -> usize {
        self.insertions()
            .map(|op| match op {
                EditOp::PrependBatch(batch) | EditOp::AppendBatch(batch) => batch_len(*batch),
                EditOp::RemoveAt { .. } => 0,
            })
            .sum()
    }

    /// Applies the whole script to `target`.
    ///
    /// `factory` is called exactly once per inserted index, in ascending order
    /// within each batch. The target must mirror [`EditScript::previous`]; if
    /// its length does not match, nothing is touched and
    /// [`WindowError::IndexOutOfRange`] is returned.
    pub fn apply<T, F>(&self, target: &mut T, factory: F) -> Result<(), WindowError>
    where
        T: RenderTarget + ?Sized,
        F: FnMut(i32) -> T::Element,
    {
        self.check_target_len(target.len())?;
        self.apply_removals(target)?;
        self.apply_insertions(target, factory);
        Ok(())
    }

    /// Applies only the removal steps, returning how many elements were removed.
    ///
    /// Stops at the first position the target does not have.
    pub fn apply_removals<T>(&self, target: &mut T) -> Result<usize, WindowError>
    where
        T: RenderTarget + ?Sized,
    {
        let mut removed = 0;
        for op in self.removals() {
            if let EditOp::RemoveAt { position, .. } = *op {
                if target.remove_at(position).is_none() {
                    return Err(WindowError::IndexOutOfRange {
                        position,
                        len: target.len(),
                    });
                }
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Applies only the insertion steps, returning how many elements were created.
    pub fn apply_insertions<T, F>(&self, target: &mut T, mut factory: F) -> usize
    where
        T: RenderTarget + ?Sized,
        F: FnMut(i32) -> T::Element,
    {
        let mut created = 0;
        for op in self.insertions() {
            match *op {
                EditOp::PrependBatch(batch) => {
                    let elements: Vec<_> = batch.indices().map(&mut factory).collect();
                    created += elements.len();
                    target.prepend(elements);
                }
                EditOp::AppendBatch(batch) => {
                    let elements: Vec<_> = batch.indices().map(&mut factory).collect();
                    created += elements.len();
                    target.append(elements);
                }
                EditOp::RemoveAt { .. } => {}
            }
        }
        created
    }

    /// Checks that a target of length `len` can mirror [`EditScript::previous`].
    pub fn check_target_len(&self, len: usize) -> Result<(), WindowError> {
        let expected = batch_len(self.previous);
        if len == expected {
            Ok(())
        } else {
            Err(WindowError::IndexOutOfRange {
                position: expected.min(len),
                len,
            })
        }
    }

    fn remove_tail(&mut self, from: i32) {
        let previous = self.previous;
        for index in (from.max(previous.start)..previous.end).rev() {
            if let Some(position) = previous.position_of(index) {
                self.ops.push(EditOp::RemoveAt { position, index });
            }
        }
    }

    fn remove_head(&mut self, until: i32) {
        let previous = self.previous;
        for index in previous.start..until.min(previous.end) {
            self.ops.push(EditOp::RemoveAt { position: 0, index });
        }
    }

    fn push_batch(&mut self, op: EditOp) {
        if let EditOp::PrependBatch(batch) | EditOp::AppendBatch(batch) = op {
            if batch.is_empty() {
                return;
            }
        }
        self.ops.push(op);
    }
}

/// Computes the edit script that turns a target mirroring `previous` into one
/// mirroring `current`.
///
/// - Equal windows (or two empty ones) produce an empty script.
/// - Windows that share no index produce a full replacement: every previous
///   element is removed from the tail inward, then `current` is appended as a
///   single batch.
/// - Overlapping windows produce only the delta: tail removals, head removals,
///   then a prepended batch for newly visible leading indices and an appended
///   batch for newly visible trailing ones.
///
/// Elements whose index is in both windows are never touched.
#[must_use]
pub fn reconcile(current: MapInterval, previous: MapInterval) -> EditScript {
    let mut script = EditScript {
        previous,
        current,
        ops: SmallVec::new(),
    };
    if current == previous || (current.is_empty() && previous.is_empty()) {
        return script;
    }

    if !current.overlaps(&previous) {
        script.remove_tail(previous.start);
        script.push_batch(EditOp::AppendBatch(current));
        return script;
    }

    if previous.end > current.end {
        script.remove_tail(current.end);
    }
    if current.start > previous.start {
        script.remove_head(current.start);
    }
    if current.start < previous.start {
        script.push_batch(EditOp::PrependBatch(MapInterval::new(
            current.start,
            previous.start,
        )));
    }
    if current.end > previous.end {
        script.push_batch(EditOp::AppendBatch(MapInterval::new(
            previous.end,
            current.end,
        )));
    }
    script
}

fn batch_len(interval: MapInterval) -> usize {
    usize::try_from(interval.len()).unwrap_or(usize::MAX)
}
