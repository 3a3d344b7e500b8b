pub mod binomial;
pub mod consts;
pub mod error;
pub mod io;
pub mod simulate;
pub mod sweep;
pub mod tracing;
