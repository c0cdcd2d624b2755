use std::any;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use derive_more::{Display, Error};

use crate::language::Symbol;

/// A value that can be recursively duplicated, sharing nothing with the original.
///
/// Unlike [`Clone`], implementations for pointer types allocate a fresh pointee rather than sharing
/// the existing one, and the operation may fail for values that can't be duplicated at all.
pub trait DeepClone: Sized {
    fn deep_clone(&self) -> Result<Self, DataCloneError>;
}

/// The value being copied (or one of its components) can't be duplicated.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("value of type {type_name} could not be cloned")]
pub struct DataCloneError {
    type_name: &'static str,
}

impl DataCloneError {
    /// Creates an error for a value of type `T`.
    pub fn of<T: ?Sized>() -> DataCloneError {
        DataCloneError {
            type_name: any::type_name::<T>(),
        }
    }

    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

macro_rules! impl_deep_clone_copy {
    ($($t:ty),* $(,)?) => {
        $(
            impl DeepClone for $t {
                fn deep_clone(&self) -> Result<Self, DataCloneError> {
                    Ok(*self)
                }
            }
        )*
    };
}

impl_deep_clone_copy!(
    (), bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    &'static str,
);

impl DeepClone for String {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        Ok(self.clone())
    }
}

impl DeepClone for Symbol {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        Err(DataCloneError::of::<Symbol>())
    }
}

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        self.as_ref().map(T::deep_clone).transpose()
    }
}

impl<T: DeepClone> DeepClone for Box<T> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        Ok(Box::new((**self).deep_clone()?))
    }
}

impl<T: DeepClone> DeepClone for Rc<T> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        Ok(Rc::new((**self).deep_clone()?))
    }
}

impl<T: DeepClone> DeepClone for Arc<T> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        Ok(Arc::new((**self).deep_clone()?))
    }
}

impl<T: DeepClone> DeepClone for RefCell<T> {
    /// Fails if the cell is currently borrowed mutably.
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        let Ok(inner) = self.try_borrow() else {
            return Err(DataCloneError::of::<RefCell<T>>());
        };
        Ok(RefCell::new(inner.deep_clone()?))
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        self.iter().map(T::deep_clone).collect()
    }
}

impl<T: DeepClone> DeepClone for VecDeque<T> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        self.iter().map(T::deep_clone).collect()
    }
}

impl<K: DeepClone + Ord, V: DeepClone> DeepClone for BTreeMap<K, V> {
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        self.iter()
            .map(|(key, value)| Ok((key.deep_clone()?, value.deep_clone()?)))
            .collect()
    }
}

impl<K, V, S> DeepClone for HashMap<K, V, S>
where
    K: DeepClone + Eq + Hash,
    V: DeepClone,
    S: BuildHasher + Default,
{
    fn deep_clone(&self) -> Result<Self, DataCloneError> {
        self.iter()
            .map(|(key, value)| Ok((key.deep_clone()?, value.deep_clone()?)))
            .collect()
    }
}

macro_rules! impl_deep_clone_tuple {
    ($($name:ident),+) => {
        impl<$($name: DeepClone),+> DeepClone for ($($name,)+) {
            #[allow(non_snake_case)]
            fn deep_clone(&self) -> Result<Self, DataCloneError> {
                let ($($name,)+) = self;
                Ok(($($name.deep_clone()?,)+))
            }
        }
    };
}

impl_deep_clone_tuple!(A);
impl_deep_clone_tuple!(A, B);
impl_deep_clone_tuple!(A, B, C);
impl_deep_clone_tuple!(A, B, C, D);
