// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering-surface and element-factory capabilities.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::Rect;
use understory_map_view::{Field, MapCoord};

/// An ordered, position-addressed list of rendered elements.
///
/// Position `0` is the head. The windowing layer keeps the elements sorted by
/// map index, so a target mirroring the interval `[start, end)` holds the
/// element for index `start + i` at position `i`.
///
/// Any array-like container satisfies this; implementations are provided for
/// [`Vec`] and [`VecDeque`]. Host toolkits implement it over their own child
/// lists (DOM children, retained scene nodes, terminal rows, ...).
pub trait RenderTarget {
    /// The rendered element type.
    type Element;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// Returns `true` if the target holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `position`.
    fn get(&self, position: usize) -> Option<&Self::Element>;

    /// Returns the element at `position` mutably.
    fn get_mut(&mut self, position: usize) -> Option<&mut Self::Element>;

    /// Inserts `elements` after the last element, keeping their order.
    fn append(&mut self, elements: Vec<Self::Element>);

    /// Inserts `elements` before the first element, keeping their order.
    fn prepend(&mut self, elements: Vec<Self::Element>);

    /// Removes and returns the element at `position`, or `None` if there is
    /// no such position.
    fn remove_at(&mut self, position: usize) -> Option<Self::Element>;
}

impl<E> RenderTarget for Vec<E> {
    type Element = E;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, position: usize) -> Option<&E> {
        self.as_slice().get(position)
    }

    fn get_mut(&mut self, position: usize) -> Option<&mut E> {
        self.as_mut_slice().get_mut(position)
    }

    fn append(&mut self, elements: Vec<E>) {
        self.extend(elements);
    }

    fn prepend(&mut self, elements: Vec<E>) {
        let tail = core::mem::replace(self, elements);
        self.extend(tail);
    }

    fn remove_at(&mut self, position: usize) -> Option<E> {
        (position < self.as_slice().len()).then(|| self.remove(position))
    }
}

impl<E> RenderTarget for VecDeque<E> {
    type Element = E;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, position: usize) -> Option<&E> {
        Self::get(self, position)
    }

    fn get_mut(&mut self, position: usize) -> Option<&mut E> {
        Self::get_mut(self, position)
    }

    fn append(&mut self, elements: Vec<E>) {
        self.extend(elements);
    }

    fn prepend(&mut self, elements: Vec<E>) {
        for element in elements.into_iter().rev() {
            self.push_front(element);
        }
    }

    fn remove_at(&mut self, position: usize) -> Option<E> {
        self.remove(position)
    }
}

/// Where a newly visible cell goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPlacement<'a> {
    /// The cell's map address.
    pub coord: MapCoord,
    /// The view-space rectangle the cell occupies under the current projection.
    pub rect: Rect,
    /// The cell's data, or `None` if the cell lies off the map.
    pub field: Option<&'a Field>,
}

/// Creates rendered elements for a two-dimensional window.
///
/// Rows are themselves render targets holding one element per visible column.
/// [`crate::MapWindow`] calls [`GridFactory::create_row`] once per newly
/// visible row and [`GridFactory::create_cell`] exactly once per newly visible
/// cell, in ascending order within each batch.
pub trait GridFactory {
    /// Rendered cell element.
    type Cell;
    /// Rendered row element; holds the row's cells.
    type Row: RenderTarget<Element = Self::Cell>;

    /// Creates an empty row for map row `y`.
    fn create_row(&mut self, y: i32) -> Self::Row;

    /// Creates the element for one cell.
    fn create_cell(&mut self, placement: CellPlacement<'_>) -> Self::Cell;
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::RenderTarget;

    fn exercise<T: RenderTarget<Element = u32>>(target: &mut T) -> Vec<u32> {
        target.append(vec![3, 4]);
        target.prepend(vec![1, 2]);
        target.append(vec![5]);
        assert_eq!(target.len(), 5);
        assert_eq!(target.remove_at(4), Some(5));
        assert_eq!(target.remove_at(0), Some(1));
        assert_eq!(target.remove_at(3), None);
        if let Some(e) = target.get_mut(1) {
            *e *= 10;
        }
        (0..target.len()).filter_map(|i| target.get(i).copied()).collect()
    }

    #[test]
    fn vec_target_keeps_batch_order() {
        let mut v: Vec<u32> = Vec::new();
        assert_eq!(exercise(&mut v), [2, 30, 4]);
    }

    #[test]
    fn deque_target_keeps_batch_order() {
        let mut d: VecDeque<u32> = VecDeque::new();
        assert_eq!(exercise(&mut d), [2, 30, 4]);
        assert!(!RenderTarget::is_empty(&d));
    }
}
