pub mod newline;
pub mod unumber;

pub use newline::newline;
pub use unumber::unumber;
