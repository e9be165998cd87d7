//! Owned-or-borrowed inputs for the simulation engine. [Capture] holds a value the engine only
//! reads; [CaptureMut] holds one it mutates, such as the random number generator. Unlike
//! [Cow](std::borrow::Cow), neither requires [ToOwned].

use std::borrow::{Borrow, BorrowMut};
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq)]
pub enum Capture<'a, W: Borrow<B>, B: ?Sized> {
    Owned(W),
    Borrowed(&'a B),
}

impl<'a, W: Borrow<B>, B: ?Sized> Deref for Capture<'a, W, B> {
    type Target = B;

    fn deref(&self) -> &B {
        match self {
            Capture::Owned(owned) => owned.borrow(),
            Capture::Borrowed(borrowed) => borrowed,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CaptureMut<'a, W: BorrowMut<B>, B: ?Sized> {
    Owned(W),
    Borrowed(&'a mut B),
}

impl<'a, W: BorrowMut<B>, B: ?Sized> Deref for CaptureMut<'a, W, B> {
    type Target = B;

    fn deref(&self) -> &B {
        match self {
            CaptureMut::Owned(owned) => owned.borrow(),
            CaptureMut::Borrowed(borrowed) => borrowed,
        }
    }
}

impl<'a, W: BorrowMut<B>, B: ?Sized> DerefMut for CaptureMut<'a, W, B> {
    fn deref_mut(&mut self) -> &mut B {
        match self {
            CaptureMut::Owned(owned) => owned.borrow_mut(),
            CaptureMut::Borrowed(borrowed) => borrowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camel::Camel;
    use crate::pyramid::Pyramid;
    use crate::track::Track;

    #[test]
    fn owned_pyramid() {
        let capture: Capture<Pyramid, Pyramid> = Capture::Owned(Pyramid::full());
        assert_eq!(5, capture.len());
    }

    #[test]
    fn borrowed_track() {
        let track = Track::default().with_stack(0, &[Camel::Red]).unwrap();
        let capture: Capture<Track, Track> = Capture::Borrowed(&track);
        assert_eq!(&[Camel::Red], capture.stack(0));
    }

    #[test]
    fn borrowed_mut_writes_through() {
        let mut pyramid = Pyramid::full();
        let mut capture: CaptureMut<Pyramid, Pyramid> = CaptureMut::Borrowed(&mut pyramid);
        capture.remove(Camel::Blue);
        assert_eq!(4, capture.len());
        assert!(!pyramid.contains(Camel::Blue));
    }

    #[test]
    fn owned_mut_is_independent() {
        let source = Pyramid::full();
        let mut capture: CaptureMut<Pyramid, Pyramid> = CaptureMut::Owned(source);
        capture.reset();
        capture.remove(Camel::Yellow);
        assert!(source.contains(Camel::Yellow));
        assert!(!capture.contains(Camel::Yellow));
    }
}
