//! Shared domain primitives.

mod errors;
mod game_status;
mod ids;
mod page_list;

pub use errors::StoreError;
pub use game_status::GameStatus;
pub use ids::{GameId, UserId};
pub use page_list::PageList;
