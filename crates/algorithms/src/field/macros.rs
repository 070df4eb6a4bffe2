//! Operator impl generators shared by both element types.
//!
//! Each element type provides private `*_elem` (same-field, panicking on a
//! mismatch) and `*_int` (integer operand) methods; these macros fan them
//! out over owned and borrowed operands.

/// `Elem op Elem` for every owned/borrowed combination, plus `op=`.
macro_rules! impl_element_binop {
    ($Elem:ty, $Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $inner:ident) => {
        impl<'a, 'b> $Trait<&'b $Elem> for &'a $Elem {
            type Output = $Elem;
            #[inline]
            fn $method(self, rhs: &'b $Elem) -> $Elem {
                self.$inner(rhs)
            }
        }

        impl<'b> $Trait<&'b $Elem> for $Elem {
            type Output = $Elem;
            #[inline]
            fn $method(self, rhs: &'b $Elem) -> $Elem {
                (&self).$inner(rhs)
            }
        }

        impl<'a> $Trait<$Elem> for &'a $Elem {
            type Output = $Elem;
            #[inline]
            fn $method(self, rhs: $Elem) -> $Elem {
                self.$inner(&rhs)
            }
        }

        impl $Trait<$Elem> for $Elem {
            type Output = $Elem;
            #[inline]
            fn $method(self, rhs: $Elem) -> $Elem {
                (&self).$inner(&rhs)
            }
        }

        impl<'b> $AssignTrait<&'b $Elem> for $Elem {
            #[inline]
            fn $assign(&mut self, rhs: &'b $Elem) {
                *self = (&*self).$inner(rhs);
            }
        }

        impl $AssignTrait<$Elem> for $Elem {
            #[inline]
            fn $assign(&mut self, rhs: $Elem) {
                *self = (&*self).$inner(&rhs);
            }
        }
    };
}

/// `Elem op int` and `int op Elem` for the listed integer types.
///
/// `$inner` computes `self op n`, `$rinner` computes `n op self`.
macro_rules! impl_integer_binop {
    ($Elem:ty, $Trait:ident, $method:ident, $inner:ident, $rinner:ident; $($Int:ty),+) => {
        $(
            impl $Trait<$Int> for $Elem {
                type Output = $Elem;
                #[inline]
                fn $method(self, rhs: $Int) -> $Elem {
                    self.$inner(rhs.into())
                }
            }

            impl<'a> $Trait<$Int> for &'a $Elem {
                type Output = $Elem;
                #[inline]
                fn $method(self, rhs: $Int) -> $Elem {
                    self.$inner(rhs.into())
                }
            }

            impl $Trait<$Elem> for $Int {
                type Output = $Elem;
                #[inline]
                fn $method(self, rhs: $Elem) -> $Elem {
                    rhs.$rinner(self.into())
                }
            }

            impl<'b> $Trait<&'b $Elem> for $Int {
                type Output = $Elem;
                #[inline]
                fn $method(self, rhs: &'b $Elem) -> $Elem {
                    rhs.$rinner(self.into())
                }
            }
        )+
    };
}

/// `Elem << k` and `Elem <<= k`.
macro_rules! impl_shl {
    ($Elem:ty, $inner:ident) => {
        impl Shl<u32> for $Elem {
            type Output = $Elem;
            #[inline]
            fn shl(self, k: u32) -> $Elem {
                self.$inner(k)
            }
        }

        impl<'a> Shl<u32> for &'a $Elem {
            type Output = $Elem;
            #[inline]
            fn shl(self, k: u32) -> $Elem {
                self.$inner(k)
            }
        }

        impl ShlAssign<u32> for $Elem {
            #[inline]
            fn shl_assign(&mut self, k: u32) {
                *self = self.$inner(k);
            }
        }
    };
}
