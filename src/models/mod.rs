pub mod event;
pub mod image;
pub mod page;
pub mod venue;
pub mod weather;

pub use event::{EventDetail, EventSummary};
pub use image::{ImageEntry, ImageSet, ImagesResponse};
pub use page::{ListResponse, Paginated};
pub use venue::{Location, Venue, VenueOption};
pub use weather::WeatherSnapshot;
