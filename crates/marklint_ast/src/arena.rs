//! Arena allocator for AST nodes.
//!
//! One arena per document: every node, child slice and text value of a parsed
//! file lives in it and is freed together once linting of that file is done.

use bumpalo::Bump;

/// Arena allocator for [`TxtNode`](crate::TxtNode) trees.
///
/// # Example
///
/// ```rust
/// use marklint_ast::AstArena;
///
/// let arena = AstArena::new();
///
/// let value = arena.alloc(42u32);
/// assert_eq!(*value, 42);
///
/// let s = arena.alloc_str("hello");
/// assert_eq!(s, "hello");
/// ```
#[derive(Default)]
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates an arena sized for a source of `capacity` bytes.
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

    /// Allocates a slice filled from an exact-size iterator.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("> quoted");
        assert_eq!(s, "> quoted");
    }

    #[test]
    fn test_arena_alloc_slice_copy() {
        let arena = AstArena::new();
        let slice = arena.alloc_slice_copy(&[1, 2, 3]);
        assert_eq!(slice, &[1, 2, 3]);
    }

    #[test]
    fn test_arena_alloc_slice_fill_iter() {
        let arena = AstArena::with_capacity(64);
        let slice = arena.alloc_slice_fill_iter((1..5).map(|n| n * 10));
        assert_eq!(slice, &[10, 20, 30, 40]);
        assert!(arena.allocated_bytes() > 0);
    }
}
