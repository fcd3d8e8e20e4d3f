mod category;
mod entry;
mod game;
mod game_category;
mod picture;
mod player;
mod rating;
mod review;
mod user;

pub use self::category::*;
pub use self::entry::*;
pub use self::game::*;
pub use self::game_category::*;
pub use self::picture::*;
pub use self::player::*;
pub use self::rating::*;
pub use self::review::*;
pub use self::user::*;
