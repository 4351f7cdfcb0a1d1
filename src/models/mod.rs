pub mod booking;
pub mod material;
pub mod note;
pub mod query;
pub mod review;
pub mod session;
pub mod user;
pub mod write_result;

pub use booking::*;
pub use material::*;
pub use note::*;
pub use query::*;
pub use review::*;
pub use session::*;
pub use user::*;
pub use write_result::*;
