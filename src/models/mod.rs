pub mod car;
pub mod user;

pub use car::{Car, NewCar};
pub use user::User;
