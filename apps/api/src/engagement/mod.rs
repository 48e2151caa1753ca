// Post engagement: like/share/favorite toggles and comments.

pub mod handlers;
pub mod store;
pub mod toggle;
