pub mod db;
pub mod routes;

pub use db::StoreKind;
pub use routes::RouteConfig;
