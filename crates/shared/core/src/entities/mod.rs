mod side;

pub use side::{ParseSideError, Side};
