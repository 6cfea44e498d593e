//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod send_rcs;

pub use send_rcs::{decode_send_rcs_json_response, encode_send_rcs_body};
