// \file src/macros.rs
//! macros for forwarding operator impls to a single ref-ref impl
//!
//! Each takes an optional list of generic parameters in brackets,
//! so `Complex<T>` and `Rational` share the same forms.

macro_rules! forward_val_val_binop {
    (impl[$($g:tt)*] $imp:ident for $res:ty, $method:ident) => {
        impl<$($g)*> $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl[$($g:tt)*] $imp:ident for $res:ty, $method:ident) => {
        impl<'a, $($g)*> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl[$($g:tt)*] $imp:ident for $res:ty, $method:ident) => {
        impl<'a, $($g)*> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

// Forward everything to ref-ref, when reusing storage is not helpful
macro_rules! forward_all_binop_to_ref_ref {
    (impl[$($g:tt)*] $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl[$($g)*] $imp for $res, $method);
        forward_val_ref_binop!(impl[$($g)*] $imp for $res, $method);
        forward_ref_val_binop!(impl[$($g)*] $imp for $res, $method);
    };
}

// Implement ref-ref binop by calling an inherent method
macro_rules! impl_ref_ref_binop_by_method {
    (impl[$($g:tt)*] $imp:ident for $res:ty, $method:ident => $inherent:path) => {
        impl<'a, 'b, $($g)*> $imp<&'b $res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                $inherent(self, other)
            }
        }

        forward_all_binop_to_ref_ref!(impl[$($g)*] $imp for $res, $method);
    };
}
