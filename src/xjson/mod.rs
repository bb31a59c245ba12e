// Mon Oct 19 2026 - Alex

//! XJSON: plain JSON extended with a closed set of tagged value kinds.
//!
//! An extension value travels as a two-key object, the reserved
//! [`TYPE_KEY`] holding the kind's tag and a companion key holding its
//! canonical text:
//!
//! ```text
//! {"__type__": "__date__", "isoformat": "2016-05-02"}
//! ```
//!
//! Application objects must not use `__type__` as a field name, they would
//! be read back as extension values.

pub mod codec;
pub mod error;
pub mod kind;
pub mod serializer;
pub mod value;

pub use codec::{decode, decode_slice, encode, from_json, to_json};
pub use error::XJsonError;
pub use kind::{ExtensionKind, TYPE_KEY};
pub use serializer::{CacheSerializer, XJsonSerializer};
pub use value::{Timestamp, Value};
