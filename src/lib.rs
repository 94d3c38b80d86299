//! Find the fertile areas left on a field once rectangles of barren land
//! have been carved out of it.

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate lazy_static;
extern crate ndarray;
extern crate regex;
extern crate tracing;

pub mod grid;
pub mod input;
pub mod scan;

/// A cell's position on the field, as `(x, y)`.
pub type Point = (usize, usize);

/// Return an iterator over every pair `(i, j)` with `i` drawn from `a` and `j`
/// from `b`. All the pairs for the first `i` come first, then those for the
/// second, and so on.
pub fn cartesian_product<A, B>(a: A, b: B) -> impl Iterator<Item = (A::Item, B::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Clone,
    B::IntoIter: Clone,
{
    let a = a.into_iter();
    let b = b.into_iter();
    a.flat_map(move |i| b.clone().map(move |j| (i.clone(), j)))
}

#[test]
#[rustfmt::skip]
fn test_cartesian_product() {
    assert_eq!(cartesian_product(0..2, 5..=7).collect::<Vec<_>>(),
               vec![(0,5), (0,6), (0,7),
                    (1,5), (1,6), (1,7)]);
    assert_eq!(cartesian_product(0..0, 0..3).count(), 0);
    assert_eq!(cartesian_product(0..3, 0..0).count(), 0);
}
