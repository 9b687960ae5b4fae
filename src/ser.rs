//! Materializing serde sequences into renderable items.
//!
//! The joiners work on any `&[T]` where `T: Display`. Values that are only
//! known to be `Serialize` (mixed tuples, sequences behind generic code,
//! newtype wrappers) go through [`to_items`] first, which flattens them into
//! one display string per element.
//!
//! ## Rendering rules
//!
//! - Integers, floats, booleans, chars and strings use their `Display` text
//! - `None` and `()` render as `null`
//! - Unit enum variants render as the variant name
//! - `Some(x)` and newtype structs are transparent
//!
//! The top-level value must be a sequence (seq, tuple or tuple struct), and
//! its elements must be scalars. Maps, structs, nested sequences, byte
//! strings and enum variants carrying data are rejected with
//! [`Error::UnsupportedType`].
//!
//! ```rust
//! use seqjoin::{join, to_items, JoinOptions};
//!
//! let items = to_items(&(1, "two", 3.5, 'c', None::<u8>)).unwrap();
//! assert_eq!(join(&items, &JoinOptions::new()), "1, two, 3.5, c, null");
//! ```

use crate::{Error, Result};
use serde::ser::{self, Impossible, Serialize};
use tracing::trace;

/// Collects the elements of a serde sequence as display strings.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] when `value` is not a flat sequence of
/// scalars.
pub fn to_items<T>(value: &T) -> Result<Vec<String>>
where
    T: ?Sized + Serialize,
{
    value.serialize(ItemsSerializer)
}

fn unsupported<T>(what: &str) -> Result<T> {
    trace!(what, "rejecting value during item collection");
    Err(Error::unsupported_type(what))
}

/// Top-level serializer: accepts sequences only.
pub struct ItemsSerializer;

/// Collects rendered elements of a sequence.
pub struct SerializeItems {
    items: Vec<String>,
}

impl SerializeItems {
    fn with_capacity(len: usize) -> Self {
        SerializeItems {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ItemSerializer)?);
        Ok(())
    }
}

const NOT_A_SEQUENCE: &str = "expected a sequence of values";

impl ser::Serializer for ItemsSerializer {
    type Ok = Vec<String>;
    type Error = Error;

    type SerializeSeq = SerializeItems;
    type SerializeTuple = SerializeItems;
    type SerializeTupleStruct = SerializeItems;
    type SerializeTupleVariant = Impossible<Vec<String>, Error>;
    type SerializeMap = Impossible<Vec<String>, Error>;
    type SerializeStruct = Impossible<Vec<String>, Error>;
    type SerializeStructVariant = Impossible<Vec<String>, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_i8(self, _v: i8) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_i16(self, _v: i16) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_i32(self, _v: i32) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_i64(self, _v: i64) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_u8(self, _v: u8) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_u16(self, _v: u16) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_u32(self, _v: u32) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_u64(self, _v: u64) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_f32(self, _v: f32) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_f64(self, _v: f64) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_char(self, _v: char) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_str(self, _v: &str) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Vec<String>> {
        unsupported("byte strings")
    }

    fn serialize_none(self) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Vec<String>>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Vec<String>> {
        unsupported(NOT_A_SEQUENCE)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Vec<String>>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Vec<String>>
    where
        T: ?Sized + Serialize,
    {
        unsupported("newtype variants")
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeItems> {
        Ok(SerializeItems::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeItems> {
        Ok(SerializeItems::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeItems> {
        Ok(SerializeItems::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        unsupported("tuple variants")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        unsupported("maps")
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        unsupported("structs")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        unsupported("struct variants")
    }
}

impl ser::SerializeSeq for SerializeItems {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.items)
    }
}

impl ser::SerializeTuple for SerializeItems {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.items)
    }
}

impl ser::SerializeTupleStruct for SerializeItems {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.items)
    }
}

/// Element serializer: renders one scalar to its display text.
pub struct ItemSerializer;

const NESTED: &str = "nested collections inside a sequence";
const NULL: &str = "null";

impl ser::Serializer for ItemSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        unsupported("byte strings")
    }

    fn serialize_none(self) -> Result<String> {
        Ok(NULL.to_string())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(NULL.to_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Ok(NULL.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        unsupported("newtype variants")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        unsupported(NESTED)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        unsupported(NESTED)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        unsupported(NESTED)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        unsupported("tuple variants")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        unsupported(NESTED)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        unsupported(NESTED)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        unsupported("struct variants")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    enum Color {
        Red,
        Green,
    }

    #[derive(Serialize)]
    struct Ids(Vec<u32>);

    #[derive(Serialize)]
    struct Point {
        x: i32,
    }

    #[test]
    fn test_vec_of_numbers() {
        assert_eq!(to_items(&vec![1, 2, 3]).unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_mixed_tuple() {
        let items = to_items(&(true, 'x', "s", -4i8, 0.25f32)).unwrap();
        assert_eq!(items, vec!["true", "x", "s", "-4", "0.25"]);
    }

    #[test]
    fn test_options_and_units() {
        let items = to_items(&[Some(1), None]).unwrap();
        assert_eq!(items, vec!["1", "null"]);
        assert_eq!(to_items(&[()]).unwrap(), vec!["null"]);
    }

    #[test]
    fn test_unit_variants_render_by_name() {
        let items = to_items(&[Color::Red, Color::Green]).unwrap();
        assert_eq!(items, vec!["Red", "Green"]);
    }

    #[test]
    fn test_newtype_wrapper_is_transparent() {
        assert_eq!(to_items(&Ids(vec![7, 8])).unwrap(), vec!["7", "8"]);
        assert_eq!(to_items(&Some(vec!["a"])).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<u8> = Vec::new();
        assert!(to_items(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_scalars() {
        assert!(matches!(to_items(&5), Err(Error::UnsupportedType(_))));
        assert!(matches!(to_items("abc"), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_rejects_nested_and_structured_values() {
        assert!(matches!(
            to_items(&vec![vec![1], vec![2]]),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(
            to_items(&Point { x: 1 }),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(
            to_items(&[Point { x: 1 }]),
            Err(Error::UnsupportedType(_))
        ));
    }
}
