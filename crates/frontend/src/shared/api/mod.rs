pub mod error;
pub mod request;
pub mod sequencer;

pub use error::ApiError;
pub use request::{
    api_base, api_url, delete, get, get_blob, get_query, post, post_multipart, put, segment,
    set_api_base,
};
pub use sequencer::{RequestSequencer, Ticket};
