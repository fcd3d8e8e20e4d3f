mod create;
mod destroy;
mod list;
mod retrieve;
mod update;

pub use self::create::*;
pub use self::destroy::*;
pub use self::list::*;
pub use self::retrieve::*;
pub use self::update::*;
