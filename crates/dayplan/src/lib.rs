pub mod account;
pub mod chat;
mod error;
pub mod form;
pub mod list;
pub mod map;
mod model;
pub mod navigation;
mod planner;
pub mod search;
pub mod seed;
mod selection;
mod store;
pub mod toast;

pub use error::{Error, Result};
pub use model::{
    Category, Coordinate, DayItinerary, Event, EventId, EventOrigin, NewEvent, TravelMethod,
    TravelSegment,
};
pub use planner::{Planner, PlannerAction};
pub use selection::{Overlay, Selection, SHEET_DRAG_THRESHOLD};
pub use store::{EventLocation, ItineraryStore};
