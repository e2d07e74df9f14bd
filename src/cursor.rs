use std::fmt;
use std::iter::FusedIterator;

use log::trace;

/// Position of a forward-only walk over a borrowed slice.
struct Scan<'a, T> {
    source: &'a [T],
    index: usize,
}

impl<'a, T> Scan<'a, T> {
    fn new(source: &'a [T]) -> Self {
        Scan { source, index: 0 }
    }

    /// Steps over the next element. The index moves before the caller sees
    /// the element, so a failing or panicking predicate leaves us past it.
    fn step(&mut self) -> Option<&'a T> {
        let value = self.source.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.source.len()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.source.len().saturating_sub(self.index)))
    }

    fn debug(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Debug,
    {
        f.debug_struct(name)
            .field("source", &self.source)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// A lazy, forward-only view over a slice that yields the elements for which
/// `predicate` holds.
///
/// The cursor is its own iterator: iterating `&mut cursor` or `cursor.by_ref()`
/// after a partial walk picks up at the current index rather than starting over.
pub struct FilterCursor<'a, T, P> {
    scan: Scan<'a, T>,
    predicate: P,
}

impl<'a, T, P> FilterCursor<'a, T, P> {
    pub fn new(source: &'a [T], predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        FilterCursor {
            scan: Scan::new(source),
            predicate,
        }
    }

    /// Number of elements inspected so far, which is one past the last
    /// element handed to the predicate.
    pub fn index(&self) -> usize {
        self.scan.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.scan.is_exhausted()
    }
}

impl<'a, T, P> Iterator for FilterCursor<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(value) = self.scan.step() {
            if (self.predicate)(value) {
                trace!("yielding element {}", self.scan.index - 1);
                return Some(value);
            }
        }
        trace!("exhausted after {} elements", self.scan.index);
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scan.size_hint()
    }
}

impl<'a, T, P> FusedIterator for FilterCursor<'a, T, P> where P: FnMut(&T) -> bool {}

impl<'a, T: fmt::Debug, P> fmt::Debug for FilterCursor<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.scan.debug("FilterCursor", f)
    }
}

/// Same scan as [`FilterCursor`], for predicates that can fail.
///
/// A failing predicate is reported as `Some(Err(_))`. The failing element has
/// already been stepped over, so calling `next` again continues with the one
/// after it.
pub struct TryFilterCursor<'a, T, P> {
    scan: Scan<'a, T>,
    predicate: P,
}

impl<'a, T, P> TryFilterCursor<'a, T, P> {
    pub fn new<E>(source: &'a [T], predicate: P) -> Self
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        TryFilterCursor {
            scan: Scan::new(source),
            predicate,
        }
    }

    pub fn index(&self) -> usize {
        self.scan.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.scan.is_exhausted()
    }
}

impl<'a, T, P, E> Iterator for TryFilterCursor<'a, T, P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    type Item = Result<&'a T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.scan.step() {
            match (self.predicate)(value) {
                Ok(true) => {
                    trace!("yielding element {}", self.scan.index - 1);
                    return Some(Ok(value));
                }
                Ok(false) => {}
                Err(e) => {
                    trace!("predicate failed on element {}", self.scan.index - 1);
                    return Some(Err(e));
                }
            }
        }
        trace!("exhausted after {} elements", self.scan.index);
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scan.size_hint()
    }
}

impl<'a, T, P, E> FusedIterator for TryFilterCursor<'a, T, P> where P: FnMut(&T) -> Result<bool, E> {}

impl<'a, T: fmt::Debug, P> fmt::Debug for TryFilterCursor<'a, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.scan.debug("TryFilterCursor", f)
    }
}

pub trait FilterCursorExt<T> {
    fn filter_cursor<P>(&self, predicate: P) -> FilterCursor<'_, T, P>
    where
        P: FnMut(&T) -> bool;

    fn try_filter_cursor<P, E>(&self, predicate: P) -> TryFilterCursor<'_, T, P>
    where
        P: FnMut(&T) -> Result<bool, E>;
}

impl<T> FilterCursorExt<T> for [T] {
    fn filter_cursor<P>(&self, predicate: P) -> FilterCursor<'_, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        FilterCursor::new(self, predicate)
    }

    fn try_filter_cursor<P, E>(&self, predicate: P) -> TryFilterCursor<'_, T, P>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        TryFilterCursor::new(self, predicate)
    }
}
