mod category;
mod entry;
mod game;
mod picture;
mod player;
mod rating;
mod review;

pub use self::category::*;
pub use self::entry::*;
pub use self::game::*;
pub use self::picture::*;
pub use self::player::*;
pub use self::rating::*;
pub use self::review::*;
