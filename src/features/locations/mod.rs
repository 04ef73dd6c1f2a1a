//! Administrative divisions lookup.
//!
//! Read-only access to three reference tables forming a hierarchy:
//! provinces, their districts, and the districts' wards. Rows are seeded
//! externally; this service never writes.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/location/province` | List all provinces |
//! | GET | `/api/location/district?province_code=` | List districts, optionally of one province |
//! | GET | `/api/location/ward?district_code=` | List wards, optionally of one district |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;


pub use services::LocationService;
pub use store::{LocationStore, PgLocationStore};
