use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use pagesnap::SectionRect;

/// One snap target. Geometry is read through [`Section::rect`] each time it is needed, so a
/// DOM-backed implementation should measure the live element rather than cache.
pub trait Section {
    fn rect(&self) -> SectionRect;
}

impl Section for SectionRect {
    fn rect(&self) -> SectionRect {
        *self
    }
}

/// Geometry that the host can update in place (e.g. after a layout change).
impl Section for Cell<SectionRect> {
    fn rect(&self) -> SectionRect {
        self.get()
    }
}

impl<S: Section + ?Sized> Section for &S {
    fn rect(&self) -> SectionRect {
        (**self).rect()
    }
}

impl<S: Section + ?Sized> Section for Rc<S> {
    fn rect(&self) -> SectionRect {
        (**self).rect()
    }
}

impl<S: Section + ?Sized> Section for Arc<S> {
    fn rect(&self) -> SectionRect {
        (**self).rect()
    }
}

/// The element whose immediate children are the sections, in document order.
///
/// Read once per configuration: [`crate::SnapController::new`] and
/// [`crate::SnapController::set_options`].
pub trait Container {
    type Section: Section;

    fn sections(&self) -> Vec<Self::Section>;
}

impl<S: Section + Clone> Container for Vec<S> {
    type Section = S;

    fn sections(&self) -> Vec<S> {
        self.clone()
    }
}

impl<S: Section + Clone, const N: usize> Container for [S; N] {
    type Section = S;

    fn sections(&self) -> Vec<S> {
        self.to_vec()
    }
}
