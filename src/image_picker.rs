pub mod impl_fake;
pub mod impl_rfd;
pub mod interface;
