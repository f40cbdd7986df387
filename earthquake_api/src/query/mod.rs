mod common;
pub use self::common::{AlertLevel, OrderBy, ParseEnumError, ReviewStatus};

mod event;
pub use self::event::{EventQuery, FORMAT_GEOJSON};
