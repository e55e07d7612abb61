//! Storage rules for structure members.
//!
//! Every member type declared in a generated structure goes through
//! [`Member`], which decides how the value is held by the structure and its
//! builder and how getters hand it back. Strings are held directly and
//! default to empty; every other member type is held as an `Option` and
//! defaults to absent.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};

/// A type that can be declared as a member of a generated structure.
pub trait Member: Sized + 'static {
    /// The storage slot shared by the structure and its builder.
    type Slot: Clone + Debug + Default + PartialEq + Send + Sync;

    /// What a getter returns for this member.
    type Ref<'a>;

    /// Stage a present value.
    fn stage(value: Self) -> Self::Slot;

    /// Stage a value that may be absent.
    fn stage_optional(value: Option<Self>) -> Self::Slot;

    /// Borrow the stored value.
    fn view(slot: &Self::Slot) -> Self::Ref<'_>;
}

impl Member for String {
    type Slot = String;
    type Ref<'a> = &'a str;

    fn stage(value: Self) -> Self::Slot {
        value
    }

    fn stage_optional(value: Option<Self>) -> Self::Slot {
        value.unwrap_or_default()
    }

    fn view(slot: &Self::Slot) -> Self::Ref<'_> {
        slot.as_str()
    }
}

/// Scalars that are stored as `Option<T>` and read back by value.
macro_rules! copy_member {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Member for $ty {
                type Slot = Option<$ty>;
                type Ref<'a> = Option<$ty>;

                fn stage(value: Self) -> Self::Slot {
                    Some(value)
                }

                fn stage_optional(value: Option<Self>) -> Self::Slot {
                    value
                }

                fn view(slot: &Self::Slot) -> Self::Ref<'_> {
                    *slot
                }
            }
        )*
    };
}

copy_member!(bool, i32, i64, f32, f64, DateTime<Utc>);

impl<T> Member for Vec<T>
where
    T: Clone + Debug + PartialEq + Send + Sync + 'static,
{
    type Slot = Option<Vec<T>>;
    type Ref<'a> = Option<&'a [T]>;

    fn stage(value: Self) -> Self::Slot {
        Some(value)
    }

    fn stage_optional(value: Option<Self>) -> Self::Slot {
        value
    }

    fn view(slot: &Self::Slot) -> Self::Ref<'_> {
        slot.as_deref()
    }
}

impl<K, V> Member for HashMap<K, V>
where
    K: Clone + Debug + Eq + Hash + Send + Sync + 'static,
    V: Clone + Debug + PartialEq + Send + Sync + 'static,
{
    type Slot = Option<HashMap<K, V>>;
    type Ref<'a> = Option<&'a HashMap<K, V>>;

    fn stage(value: Self) -> Self::Slot {
        Some(value)
    }

    fn stage_optional(value: Option<Self>) -> Self::Slot {
        value
    }

    fn view(slot: &Self::Slot) -> Self::Ref<'_> {
        slot.as_ref()
    }
}
