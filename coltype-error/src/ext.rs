use crate::{ColtypeResult, ErrString};

/// Extension trait for [`ColtypeResult`].
pub trait ResultExt<T>: private::Sealed {
    /// Wrap the error, if any, with a lazily computed context message.
    fn with_context<M, F>(self, msg: F) -> ColtypeResult<T>
    where
        M: Into<ErrString>,
        F: FnOnce() -> M;
}

mod private {
    use crate::ColtypeResult;

    pub trait Sealed {}

    impl<T> Sealed for ColtypeResult<T> {}
}

impl<T> ResultExt<T> for ColtypeResult<T> {
    fn with_context<M, F>(self, msg: F) -> ColtypeResult<T>
    where
        M: Into<ErrString>,
        F: FnOnce() -> M,
    {
        self.map_err(|e| e.with_context(msg()))
    }
}
