pub mod device;
pub mod feature;
pub mod media;
pub mod recording;
pub mod sensor;

pub(self) mod util;
use util::impl_module;
