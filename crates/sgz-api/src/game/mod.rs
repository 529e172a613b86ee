pub mod controller;
pub mod model;
pub mod routes;
pub mod service;

pub use controller::GameController;
pub use model::GameView;
pub use routes::routes;
