//! Definitions of structs describing response data from the BaseSpace API.
//!
//! Fields the platform does not always send are [Option]s. Unknown fields are ignored.

mod billing;
mod oauth;
mod project;
mod run;
mod sample;
mod user;

pub use billing::*;
pub use oauth::*;
pub use project::*;
pub use run::*;
pub use sample::*;
pub use user::*;
