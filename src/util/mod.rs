pub mod err;
#[cfg(feature = "tracing")]
pub mod trace;

#[cfg(test)]
pub(crate) mod fixture;
