pub mod backend;
pub use backend::PdvBackend;
pub mod postgres;
pub use postgres::PgBackend;
