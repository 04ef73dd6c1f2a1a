mod district;
mod province;
mod ward;

pub use district::District;
pub use province::Province;
pub use ward::Ward;
