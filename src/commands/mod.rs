mod count;
mod info;
mod replay;

pub use count::CountCmd;
pub use info::InfoCmd;
pub use replay::ReplayCmd;
