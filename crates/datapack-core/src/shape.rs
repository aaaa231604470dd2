//! Static shape classification of payload types

use crate::DataType;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Classifies a payload type as a composite object or a scalar value
///
/// The tag is decided once per type, never per instance. Record types
/// implement this with an empty impl block (or `#[derive(Payload)]`) and get
/// [`DataType::AsObject`]; scalar types override the constant with
/// [`DataType::AsValue`]. Strings are objects on the wire, so `String` and
/// `str` keep the default tag.
///
/// # Example
///
/// ```
/// use datapack_core::{DataType, PayloadShape};
///
/// struct User {
///     name: String,
/// }
///
/// impl PayloadShape for User {}
///
/// assert_eq!(User::DATA_TYPE, DataType::AsObject);
/// assert_eq!(<u32 as PayloadShape>::DATA_TYPE, DataType::AsValue);
/// ```
pub trait PayloadShape {
    /// Tag written to `info.dataType` when this type is packed on its own
    const DATA_TYPE: DataType = DataType::AsObject;
}

macro_rules! scalar_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PayloadShape for $ty {
                const DATA_TYPE: DataType = DataType::AsValue;
            }
        )*
    };
}

scalar_shape!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl PayloadShape for String {}
impl PayloadShape for str {}

impl<T> PayloadShape for Vec<T> {}
impl<T> PayloadShape for [T] {}
impl<K, V, S> PayloadShape for HashMap<K, V, S> {}
impl<K, V> PayloadShape for BTreeMap<K, V> {}
impl PayloadShape for serde_json::Value {}

macro_rules! forward_shape {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: PayloadShape + ?Sized> PayloadShape for $wrapper<T> {
                const DATA_TYPE: DataType = T::DATA_TYPE;
            }
        )*
    };
}

forward_shape!(Box, Rc, Arc);

impl<T: PayloadShape + ?Sized> PayloadShape for &T {
    const DATA_TYPE: DataType = T::DATA_TYPE;
}

impl<T: PayloadShape> PayloadShape for Option<T> {
    const DATA_TYPE: DataType = T::DATA_TYPE;
}
