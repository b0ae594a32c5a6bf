pub use super::bind_channel_category::Entity as BindChannelCategory;
pub use super::bind_request_channel_user::Entity as BindRequestChannelUser;
pub use super::category::Entity as Category;
pub use super::channel::Entity as Channel;
pub use super::channel_user::Entity as ChannelUser;
pub use super::message::Entity as Message;
pub use super::recommendation::Entity as Recommendation;
pub use super::request::Entity as Request;
pub use super::top_song::Entity as TopSong;
pub use super::top_tmdb::Entity as TopTmdb;
pub use super::user::Entity as User;
