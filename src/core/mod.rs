pub mod century;
pub mod config;
pub mod diverging;
pub mod errors;
pub mod models;
pub mod progress;
pub mod sanitize;
pub mod tasks;
pub mod validation;

pub use config::ApiConfig;
pub use errors::PredictError;
pub use models::{ BinaryPrediction, FlatPrediction, ModelKey, PredictionItem, UploadFile };
