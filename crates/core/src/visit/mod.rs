mod clock;
mod error;
mod requests;
mod responses;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RecordError, ValidationError};
pub use requests::RecordVisitRequest;
pub use responses::{AckResponse, ErrorResponse, RecordVisitResponse, VISIT_RECORDED_MESSAGE};
pub use types::{format_visit_date, visit_date_for, VisitKey, VisitRecord, VISIT_DATE_FORMAT};
