/******************************************\
|==========================================|
|      Macro: impl_from_to_primitive       |
|==========================================|
\******************************************/

/// Generates `from_unchecked` and `index` for a fieldless `#[repr(u8)]` enum with a `NUM` constant.
///
/// - `unsafe fn from_unchecked(index: u8) -> Self`: converts a discriminant back into the enum.
/// - `const fn index(&self) -> usize`: the discriminant as a table index.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name))]
            /// ## Safety
            /// - `index` must be a valid discriminant (`index < Self::NUM`)
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!(index < Self::NUM as u8, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` over every variant of an enum that has `NUM` and `from_unchecked`.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}
