pub mod check;
pub mod classify;
pub mod format;
pub mod generate;
pub mod sanitize;
