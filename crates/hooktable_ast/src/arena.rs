//! Arena allocator for document nodes.
//!
//! Uses `bumpalo` for bump allocation. All nodes of one document live in the
//! same arena and are freed together once extraction is complete.

use bumpalo::Bump;

/// Arena allocator for document nodes.
///
/// # Example
///
/// ```rust
/// use hooktable_ast::AstArena;
///
/// let arena = AstArena::new();
///
/// let value = arena.alloc(42u32);
/// assert_eq!(*value, 42);
///
/// let s = arena.alloc_str("pull_request");
/// assert_eq!(s, "pull_request");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena sized for a source buffer of `capacity` bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Allocates a slice in the arena filled from an exact-size iterator.
    #[inline]
    pub fn alloc_slice_fill_iter<T, I>(&self, iter: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(iter)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_alloc() {
        let arena = AstArena::new();
        let value = arena.alloc(42u32);
        assert_eq!(*value, 42);
    }

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("workflow_dispatch");
        assert_eq!(s, "workflow_dispatch");
    }

    #[test]
    fn test_arena_alloc_slice_fill_iter() {
        let arena = AstArena::new();
        let slice = arena.alloc_slice_fill_iter([1, 2, 3].into_iter().map(|n| n * 10));
        assert_eq!(slice, &[10, 20, 30]);
    }

    #[test]
    fn test_with_capacity_alloc() {
        let arena = AstArena::with_capacity(4096);
        let s = arena.alloc_str("push");
        assert_eq!(s, "push");
        assert!(arena.allocated_bytes() > 0);
    }
}
