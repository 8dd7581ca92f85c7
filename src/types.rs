mod enums;
mod ids;
/// Primitive BaseSpace API data types and NewType-patterns.
mod strings;
mod urls;

pub use enums::*;
pub use ids::*;
pub use strings::*;
pub use urls::*;
