pub mod json_contract;
pub mod request;
pub mod series;

pub use json_contract::{PLOT_REQUEST_JSON_SCHEMA_V1, PlotRequestJsonContractV1};
pub use request::PlotRequest;
pub use series::Series;
