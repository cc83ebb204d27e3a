//! Domain entities - the core business objects.

mod email;
mod movie;
mod page;
mod password;
mod role;
mod user;

pub use email::{Email, mask_email};
pub use movie::{Movie, MovieDetails, MoviePatch};
pub use page::{Page, page_offset};
pub use password::{Password, PasswordHash};
pub use role::Role;
pub use user::{PublicUser, User};
