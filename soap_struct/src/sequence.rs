/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::{
    any::{type_name, Any},
    fmt,
};

use crate::{Error, SoapStruct};

/// A struct value whose concrete type is only known at runtime.
///
/// This is the entry point for callers which assemble structs dynamically.
/// [`TypedSequence`] checks the concrete type on insertion.
pub trait DynStruct: Any + fmt::Debug {
    /// The name of the concrete struct type.
    fn capability(&self) -> &'static str;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> DynStruct for T
where
    T: SoapStruct + Any + fmt::Debug,
{
    fn capability(&self) -> &'static str {
        type_name::<T>()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// An ordered collection of structs of a single type.
///
/// Elements are serialized in insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct TypedSequence<T> {
    elements: Vec<T>,
}

impl<T> TypedSequence<T>
where
    T: SoapStruct,
{
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Builds a sequence from dynamically typed elements.
    ///
    /// Fails if any element is not a `T`.
    pub fn try_from_dyn<I>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Box<dyn DynStruct>>,
        T: 'static,
    {
        let mut sequence = Self::new();
        sequence.try_extend_dyn(elements)?;

        Ok(sequence)
    }

    /// The type tag every element of this sequence satisfies.
    pub fn capability(&self) -> &'static str {
        type_name::<T>()
    }

    /// Appends an element.
    pub fn add(&mut self, element: T) -> &mut Self {
        self.elements.push(element);

        self
    }

    /// Appends a dynamically typed element.
    ///
    /// If the element is not a `T`, the sequence is left unchanged.
    pub fn try_add_dyn(&mut self, element: Box<dyn DynStruct>) -> Result<&mut Self, Error>
    where
        T: 'static,
    {
        let element = downcast_element::<T>(element)?;
        self.elements.push(element);

        Ok(self)
    }

    /// Appends several dynamically typed elements.
    ///
    /// Either every element is appended or, if any element is not a `T`, none
    /// are.
    pub fn try_extend_dyn<I>(&mut self, elements: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = Box<dyn DynStruct>>,
        T: 'static,
    {
        let checked = elements
            .into_iter()
            .map(downcast_element::<T>)
            .collect::<Result<Vec<_>, _>>()?;
        self.elements.extend(checked);

        Ok(self)
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

fn downcast_element<T>(element: Box<dyn DynStruct>) -> Result<T, Error>
where
    T: SoapStruct + 'static,
{
    let found = element.capability();

    element
        .into_any()
        .downcast::<T>()
        .map(|element| *element)
        .map_err(|_| Error::TypeMismatch {
            expected: type_name::<T>(),
            found,
        })
}

impl<T> Default for TypedSequence<T>
where
    T: SoapStruct,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypedSequence<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

impl<T> From<Vec<T>> for TypedSequence<T>
where
    T: SoapStruct,
{
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for TypedSequence<T>
where
    T: SoapStruct,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for TypedSequence<T>
where
    T: SoapStruct,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a TypedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for TypedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
