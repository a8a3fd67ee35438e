//! Callback handle stored inside state slices

use std::fmt;
use std::rc::Rc;

/// A shared, caller-supplied closure held by the store until it is consumed
/// or replaced.
///
/// Cloning shares the same closure. Two callbacks are equal only when they
/// point at the same closure, so state containing callbacks can still be
/// compared.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Run the closure
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(<fn>)")
    }
}
