/// Converts errors from their error type (of the submodule) to that of
/// an alight::Error variant.
///
/// ```rust,ignore
/// use alight::trip::TripError;
/// alight::impl_err!(TripError, Trip);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
    }
}
