//! Tag commands

mod add;
mod delete;
mod find_or_create;
mod get;
mod list;
mod update;

pub use add::AddTag;
pub use delete::DeleteTag;
pub use find_or_create::FindOrCreateTag;
pub use get::{GetTag, GetTags};
pub use list::ListTags;
pub use update::UpdateTag;
