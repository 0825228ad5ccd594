//! Query parameter set and the request encoder.
//!
//! Request records describe their wire shape with ordinary serde attributes:
//! `#[serde(rename = "...")]` sets the wire key, an `Option<T>` field is
//! optional (absent values emit nothing), and
//! `#[serde(skip_serializing_if = "tensor_core::query::omit_empty")]` drops a
//! present value that equals its type's zero value. [`encode`] walks the
//! fields in declaration order and stringifies each one:
//!
//! | Rust type | Wire value |
//! |---|---|
//! | `bool` | `true` / `false` |
//! | integers | canonical decimal |
//! | `f32` / `f64` | shortest round-trip decimal, never exponent notation |
//! | `String` / `&str` | passed through, escaped later by the transport |
//! | `Vec<String>` | elements joined with `,`, no per-element escaping |
//! | `Option<T>` | one level of optionality around any of the above |
//!
//! Everything else is rejected with [`EncodingError`].

use std::fmt::Display;

use serde::ser::{self, Impossible, Serialize};

use crate::error::EncodingError;

/// Ordered set of query parameters.
///
/// Keys keep their first-insertion order and are unique: pushing an existing
/// key appends another value to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(&'static str, Vec<String>)>,
}

impl QueryParams {
    /// Create a new, empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a value under `key`.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Append a value when it is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values stored under `key`.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_all(key).is_some()
    }

    /// Keys in emission order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Flattened key/value pairs in emission order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, &str)> {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (*key, value.as_str())))
            .collect()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Types with a zero value, used by [`omit_empty`].
pub trait ZeroValue {
    /// Returns true if `self` equals the type's zero value.
    fn is_zero(&self) -> bool;
}

macro_rules! zero_value_int {
    ($($ty:ty),*) => {
        $(impl ZeroValue for $ty {
            fn is_zero(&self) -> bool {
                *self == 0
            }
        })*
    };
}

zero_value_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl ZeroValue for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl ZeroValue for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for &str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// `skip_serializing_if` predicate for optional omit-when-empty fields.
///
/// Skips the field when it is absent or holds its type's zero value.
pub fn omit_empty<T: ZeroValue>(value: &Option<T>) -> bool {
    value.as_ref().map_or(true, ZeroValue::is_zero)
}

/// `skip_serializing_if` predicate for required omit-when-empty fields.
pub fn is_zero<T: ZeroValue>(value: &T) -> bool {
    value.is_zero()
}

/// Encode a request record into query parameters.
///
/// # Errors
///
/// Returns [`EncodingError`] if `request` is not a struct, or if any field
/// holds a type outside the supported set.
pub fn encode<T>(request: &T) -> Result<QueryParams, EncodingError>
where
    T: Serialize + ?Sized,
{
    request.serialize(RecordSerializer)
}

fn unsupported(kind: &str) -> EncodingError {
    EncodingError::new(format!("unsupported field type: {kind}"))
}

fn format_float(value: f64) -> Result<String, EncodingError> {
    if value.is_finite() {
        Ok(value.to_string())
    } else {
        Err(EncodingError::new(format!(
            "non-finite float {value} cannot be encoded"
        )))
    }
}

/// Top-level serializer: accepts a struct (optionally behind one `Option`).
struct RecordSerializer;

impl RecordSerializer {
    fn not_a_record(kind: &str) -> EncodingError {
        EncodingError::new(format!("expected struct, got {kind}"))
    }
}

impl ser::Serializer for RecordSerializer {
    type Ok = QueryParams;
    type Error = EncodingError;

    type SerializeSeq = Impossible<QueryParams, EncodingError>;
    type SerializeTuple = Impossible<QueryParams, EncodingError>;
    type SerializeTupleStruct = Impossible<QueryParams, EncodingError>;
    type SerializeTupleVariant = Impossible<QueryParams, EncodingError>;
    type SerializeMap = Impossible<QueryParams, EncodingError>;
    type SerializeStruct = FieldCollector;
    type SerializeStructVariant = Impossible<QueryParams, EncodingError>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("i16"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("i32"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("i64"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("u8"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("u16"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("u32"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("u64"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(QueryParams::new())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(QueryParams::new())
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record(name))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_record(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Err(Self::not_a_record("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Err(Self::not_a_record("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(Self::not_a_record(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(Self::not_a_record(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Err(Self::not_a_record("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(FieldCollector {
            params: QueryParams {
                entries: Vec::with_capacity(len),
            },
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(Self::not_a_record(name))
    }
}

/// Collects the fields of one record.
struct FieldCollector {
    params: QueryParams,
}

impl ser::SerializeStruct for FieldCollector {
    type Ok = QueryParams;
    type Error = EncodingError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        let encoded = value
            .serialize(ValueSerializer { in_option: false })
            .map_err(|err| err.in_field(key))?;
        if let Some(encoded) = encoded {
            self.params.push(key, encoded);
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.params)
    }
}

/// Stringifies one field value; `None` means the key is left out.
#[derive(Clone, Copy)]
struct ValueSerializer {
    in_option: bool,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Option<String>;
    type Error = EncodingError;

    type SerializeSeq = ListJoiner;
    type SerializeTuple = Impossible<Option<String>, EncodingError>;
    type SerializeTupleStruct = Impossible<Option<String>, EncodingError>;
    type SerializeTupleVariant = Impossible<Option<String>, EncodingError>;
    type SerializeMap = Impossible<Option<String>, EncodingError>;
    type SerializeStruct = Impossible<Option<String>, EncodingError>;
    type SerializeStructVariant = Impossible<Option<String>, EncodingError>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        if v.is_finite() {
            Ok(Some(v.to_string()))
        } else {
            format_float(f64::from(v)).map(Some)
        }
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        format_float(v).map(Some)
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Self::Error> {
        Err(unsupported("char"))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(Some(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Err(unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        if self.in_option {
            return Err(EncodingError::new(
                "nested optional values are not supported",
            ));
        }
        Ok(None)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        if self.in_option {
            return Err(EncodingError::new(
                "nested optional values are not supported",
            ));
        }
        value.serialize(Self { in_option: true })
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok, Self::Error> {
        Err(unsupported(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Err(unsupported(name))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        Err(unsupported(name))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(ListJoiner {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Err(unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(unsupported(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(unsupported(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Err(unsupported("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Err(unsupported(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(unsupported(name))
    }
}

/// Joins a sequence of strings with `,`.
struct ListJoiner {
    items: Vec<String>,
}

impl ser::SerializeSeq for ListJoiner {
    type Ok = Option<String>;
    type Error = EncodingError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.items.push(value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(Some(self.items.join(",")))
    }
}

/// Accepts string elements only.
struct ElementSerializer;

impl ElementSerializer {
    fn not_a_string(kind: &str) -> EncodingError {
        EncodingError::new(format!("unsupported slice element type: {kind}"))
    }
}

impl ser::Serializer for ElementSerializer {
    type Ok = String;
    type Error = EncodingError;

    type SerializeSeq = Impossible<String, EncodingError>;
    type SerializeTuple = Impossible<String, EncodingError>;
    type SerializeTupleStruct = Impossible<String, EncodingError>;
    type SerializeTupleVariant = Impossible<String, EncodingError>;
    type SerializeMap = Impossible<String, EncodingError>;
    type SerializeStruct = Impossible<String, EncodingError>;
    type SerializeStructVariant = Impossible<String, EncodingError>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("i16"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("i32"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("i64"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("u8"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("u16"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("u32"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("u64"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("char"))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("option"))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("option"))
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string(name))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        Err(Self::not_a_string(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Err(Self::not_a_string("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Err(Self::not_a_string("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(Self::not_a_string(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(Self::not_a_string(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Err(Self::not_a_string("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Err(Self::not_a_string(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(Self::not_a_string(name))
    }
}
