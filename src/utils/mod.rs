pub mod id;
pub use id::{AsId, GroupId, ReplyToken, UserId};
