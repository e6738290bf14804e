//! Image bounds: the rectangular extent of a decoded image.
//!
//! Every image handled by the comparators reports its [`Bounds`]: an origin
//! plus a width and height. Two images are *comparable* only when their
//! bounds are structurally equal, meaning same origin and same extent. A 4x4
//! image at (0, 0) and a 4x4 image at (2, 2) are not comparable.
//!
//! # Coordinate System
//!
//! - Origin may be anywhere, including negative coordinates
//! - X increases to the right
//! - Y increases downward
//! - Left/top edges are inclusive, right/bottom edges exclusive
//!
//! ```text
//! (x,y) ────────► X
//!   │ ┌──────────┐
//!   │ │  width   │ height
//!   │ └──────────┘
//!   ▼            (right, bottom) exclusive
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixcmp_core::Bounds;
//!
//! let a = Bounds::new(0, 0, 2, 2);
//! let b = Bounds::from_size(2, 2);
//! assert_eq!(a, b);
//! assert_ne!(a, Bounds::new(1, 0, 2, 2));
//! ```
//!
//! # Used By
//!
//! - [`crate::image::DecodedImage`] - Bounds query
//! - `pixcmp-ops` - Comparability precondition

/// One past the largest coordinate an `i32` can hold.
const MAX_EDGE: i64 = i32::MAX as i64 + 1;

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// Equality is structural: origin and extent must both match.
///
/// # Example
///
/// ```rust
/// use pixcmp_core::Bounds;
///
/// let b = Bounds::new(-4, 10, 100, 50);
/// assert_eq!(b.right(), 96);
/// assert_eq!(b.bottom(), 60);
/// assert_eq!(b.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Bounds {
    /// Creates bounds with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates bounds only if every covered pixel has an `i32` coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixcmp_core::Bounds;
    ///
    /// assert!(Bounds::checked_new(-10, 0, 20, 5).is_some());
    /// assert!(Bounds::checked_new(i32::MAX, 0, 2, 1).is_none());
    /// ```
    #[inline]
    pub const fn checked_new(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        let b = Self::new(x, y, width, height);
        if b.is_addressable() {
            Some(b)
        } else {
            None
        }
    }

    /// Creates bounds at origin (0, 0) with the given dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixcmp_core::Bounds;
    ///
    /// let b = Bounds::from_size(1920, 1080);
    /// assert_eq!((b.x, b.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    ///
    /// Widened to `i64` so that `x + width` never overflows.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Returns the number of pixels covered.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the same extent moved to origin (0, 0).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixcmp_core::Bounds;
    ///
    /// let b = Bounds::new(5, -3, 8, 6);
    /// assert_eq!(b.at_origin(), Bounds::from_size(8, 6));
    /// ```
    #[inline]
    pub const fn at_origin(&self) -> Self {
        Self::from_size(self.width, self.height)
    }

    /// Returns `true` if the right and bottom edges stay within `i32::MAX + 1`,
    /// so every covered pixel has an `i32` coordinate.
    ///
    /// Image buffers refuse bounds for which this is `false`.
    #[inline]
    pub const fn is_addressable(&self) -> bool {
        self.right() <= MAX_EDGE && self.bottom() <= MAX_EDGE
    }

    /// Returns `true` if the point (px, py) lies inside these bounds.
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        let px = px as i64;
        let py = py as i64;
        px >= self.x as i64 && px < self.right() && py >= self.y as i64 && py < self.bottom()
    }

    /// Returns an iterator over the absolute Y coordinate of every row.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = i32> + use<> {
        let y = self.y;
        (0..self.height).map(move |dy| (y as i64 + dy as i64) as i32)
    }

    /// Returns an iterator over the absolute X coordinate of every column.
    #[inline]
    pub fn columns(&self) -> impl Iterator<Item = i32> + use<> {
        let x = self.x;
        (0..self.width).map(move |dx| (x as i64 + dx as i64) as i32)
    }

    /// Returns an iterator over all (x, y) coordinates, row by row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixcmp_core::Bounds;
    ///
    /// let b = Bounds::new(-1, 0, 2, 2);
    /// let coords: Vec<_> = b.iter_coords().collect();
    /// assert_eq!(coords, vec![(-1, 0), (0, 0), (-1, 1), (0, 1)]);
    /// ```
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let columns = *self;
        self.rows()
            .flat_map(move |y| columns.columns().map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
