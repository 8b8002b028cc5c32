use std::io;

use chrono::NaiveDate;

use crate::model::EventId;

/// Planner related errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no itinerary for {0}")]
    DayNotFound(NaiveDate),

    #[error("no event with id {0}")]
    EventNotFound(EventId),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
