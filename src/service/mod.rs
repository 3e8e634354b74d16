mod cars;
mod users;

pub use cars::CarService;
pub use users::UserService;
