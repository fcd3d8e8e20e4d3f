mod lookup;
mod params;

pub use self::lookup::*;
pub use self::params::*;
