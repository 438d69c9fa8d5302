//! Rendering of compiler errors against their source.

mod printer;


pub use printer::ErrorPrinter;
