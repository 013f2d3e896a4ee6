/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! This module provides implementations of attribute serialization for common
//! types from the standard library.

use serde_json::Value;

use crate::AttrValue;

/// Serializes a boolean as the integer `1` or `0`.
///
/// The remote API never accepts the literal tokens `true` and `false`.
impl AttrValue for bool {
    fn to_array_value(&self) -> Value {
        Value::from(u8::from(*self))
    }

    fn to_attr_string(&self) -> String {
        u8::from(*self).to_string()
    }
}

/// Serializes a string as-is.
impl AttrValue for str {
    fn to_array_value(&self) -> Value {
        Value::from(self)
    }

    fn to_attr_string(&self) -> String {
        self.to_owned()
    }
}

/// Serializes a string as-is.
impl AttrValue for String {
    fn to_array_value(&self) -> Value {
        Value::from(self.as_str())
    }

    fn to_attr_string(&self) -> String {
        self.clone()
    }
}

/// Serializes the referenced value.
impl<T> AttrValue for &T
where
    T: AttrValue + ?Sized,
{
    fn to_array_value(&self) -> Value {
        (**self).to_array_value()
    }

    fn to_attr_string(&self) -> String {
        (**self).to_attr_string()
    }
}

/// Implements attribute serialization for integer types.
///
/// Integers are kept as JSON numbers in the array form.
macro_rules! impl_attr_value_for_int {
    ($( $ty:ty ),*) => {
        $(
        impl AttrValue for $ty {
            fn to_array_value(&self) -> Value {
                Value::from(*self)
            }

            fn to_attr_string(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_attr_value_for_int!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Implements [`AttrValue`] for types with a `Display` implementation giving
/// their wire value, such as closed sets of string values.
///
/// ```
/// use std::fmt;
///
/// enum Method {
///     Get,
/// }
///
/// impl fmt::Display for Method {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("get")
///     }
/// }
///
/// soap_struct::impl_attr_value_via_display!(Method);
///
/// use soap_struct::AttrValue;
/// assert_eq!(Method::Get.to_attr_string(), "get");
/// ```
#[macro_export]
macro_rules! impl_attr_value_via_display {
    ($( $ty:ty ),* $(,)?) => {
        $(
        impl $crate::AttrValue for $ty {
            fn to_array_value(&self) -> $crate::serde_json::Value {
                $crate::serde_json::Value::String(self.to_string())
            }

            fn to_attr_string(&self) -> ::std::string::String {
                self.to_string()
            }
        })*
    };
}
