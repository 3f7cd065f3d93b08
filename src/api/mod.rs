// Bindings: one request descriptor per call, handed to the transport untouched.

pub mod endpoints;
pub mod goods;
pub mod orders;
pub mod user;

pub use goods::GoodsApi;
pub use orders::OrdersApi;
pub use user::UserApi;
