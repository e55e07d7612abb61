//! Immutable structures and the builders that stage them.

use std::fmt::Debug;

/// An immutable request or response payload.
///
/// Structures are only read through their getters; every change goes
/// through a [`StructureBuilder`] and produces a new value.
pub trait Structure: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// The builder that stages this structure.
    type Builder: StructureBuilder<Output = Self>;

    /// Name of the structure shape.
    const SHAPE: &'static str;

    /// A builder with every member at its default.
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// A builder seeded with this structure's current values.
    fn to_builder(&self) -> Self::Builder;

    /// Copy this structure, apply `edit` to the copy's builder and build it.
    #[must_use]
    fn with_changes(&self, edit: impl FnOnce(&mut Self::Builder)) -> Self {
        let mut builder = self.to_builder();
        edit(&mut builder);
        builder.build()
    }
}

/// A mutable staging area for a [`Structure`].
///
/// Setters accept any value and never fail. `build` takes `&self`, so a
/// builder can keep producing snapshots after the first one.
pub trait StructureBuilder: Clone + Debug + Default + Send + Sync {
    /// The structure this builder produces.
    type Output: Structure;

    /// Snapshot the staged values into a new structure.
    fn build(&self) -> Self::Output;
}

/// Declare an immutable structure together with its builder.
///
/// For `pub struct Foo { bar: T, .. }` this expands to `Foo` with a getter
/// per member and to `FooBuilder` with a fluent setter `bar(impl Into<T>)`,
/// an absence-aware `set_bar(Option<T>)` and a reader `get_bar()`. Member
/// storage follows [`Member`](crate::Member).
///
/// ```
/// use s3crt_model::s3_structure;
///
/// s3_structure! {
///     /// A key/value label.
///     pub struct Label {
///         /// Label key.
///         key: String,
///         /// Label weight.
///         weight: i32,
///     }
/// }
///
/// let label = Label::builder().key("team").weight(3).build();
/// assert_eq!(label.key(), "team");
/// assert_eq!(label.weight(), Some(3));
///
/// let renamed = label.to_builder().key("owner").build();
/// assert_eq!(renamed.key(), "owner");
/// assert_eq!(renamed.weight(), Some(3));
/// ```
#[macro_export]
macro_rules! s3_structure {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty,
            )*
        }
    ) => {
        $crate::__private::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            $vis struct $name {
                $(
                    $field: <$ty as $crate::Member>::Slot,
                )*
            }

            impl $name {
                /// A builder with every member at its default.
                #[must_use]
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }

                /// A builder seeded with this structure's current values.
                #[must_use]
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>] {
                        $(
                            $field: ::std::clone::Clone::clone(&self.$field),
                        )*
                    }
                }

                $(
                    $(#[$field_meta])*
                    #[must_use]
                    pub fn $field(&self) -> <$ty as $crate::Member>::Ref<'_> {
                        <$ty as $crate::Member>::view(&self.$field)
                    }
                )*
            }

            /// Staging builder for the structure of the same name.
            #[derive(Debug, Clone, Default, PartialEq)]
            $vis struct [<$name Builder>] {
                $(
                    $field: <$ty as $crate::Member>::Slot,
                )*
            }

            impl [<$name Builder>] {
                $(
                    $(#[$field_meta])*
                    pub fn $field(&mut self, value: impl ::std::convert::Into<$ty>) -> &mut Self {
                        self.$field = <$ty as $crate::Member>::stage(value.into());
                        self
                    }

                    /// Stage the member, resetting it to its default when `None`.
                    pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) -> &mut Self {
                        self.$field = <$ty as $crate::Member>::stage_optional(value);
                        self
                    }

                    /// The currently staged value of the member.
                    #[must_use]
                    pub fn [<get_ $field>](&self) -> <$ty as $crate::Member>::Ref<'_> {
                        <$ty as $crate::Member>::view(&self.$field)
                    }
                )*

                /// Snapshot the staged values into a new structure.
                #[must_use]
                pub fn build(&self) -> $name {
                    $name {
                        $(
                            $field: ::std::clone::Clone::clone(&self.$field),
                        )*
                    }
                }
            }

            impl $crate::Structure for $name {
                type Builder = [<$name Builder>];

                const SHAPE: &'static str = stringify!($name);

                fn to_builder(&self) -> Self::Builder {
                    $name::to_builder(self)
                }
            }

            impl $crate::StructureBuilder for [<$name Builder>] {
                type Output = $name;

                fn build(&self) -> $name {
                    [<$name Builder>]::build(self)
                }
            }

            impl $crate::Member for $name {
                type Slot = ::std::option::Option<$name>;
                type Ref<'a> = ::std::option::Option<&'a $name>;

                fn stage(value: Self) -> Self::Slot {
                    Some(value)
                }

                fn stage_optional(value: ::std::option::Option<Self>) -> Self::Slot {
                    value
                }

                fn view(slot: &Self::Slot) -> Self::Ref<'_> {
                    slot.as_ref()
                }
            }
        }
    };
}
