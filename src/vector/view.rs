//! Named field access for vectors via `Deref` views.
//!
//! `Vector` stores its elements as an array, but geometry code wants to write
//! `v.x` rather than `v[0]`. Dereferencing a [`Vector`] yields a `#[repr(C)]`
//! view struct of matching dimension, so both spellings work, including
//! through `&mut`.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! views {
    ($($n:literal => $view:ident,)+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: the view is `#[repr(C)]` with the same number
                    // of `T` fields as the `#[repr(transparent)]` array.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    2 => XY,
    3 => XYZ,
    4 => XYZW,
}
