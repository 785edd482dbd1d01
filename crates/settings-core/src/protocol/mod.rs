//! Protocol module containing the JSON wire format of the settings backend.

pub mod wire;

pub use wire::{
    decode_partial, decode_partial_str, encode_record, extract_error_message, WireError,
};
