//! Operator boilerplate shared by the two value types.

/// Forward a binary operator to its `*Assign<&T>` implementation across
/// the owned/borrowed operand combinations.
macro_rules! forward_binop {
    ($type:ty, $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident) => {
        impl std::ops::$trait<&$type> for &$type {
            type Output = $type;

            fn $method(self, other: &$type) -> $type {
                let mut result = self.clone();
                std::ops::$assign_trait::$assign_method(&mut result, other);
                result
            }
        }

        impl std::ops::$trait<&$type> for $type {
            type Output = $type;

            fn $method(mut self, other: &$type) -> $type {
                std::ops::$assign_trait::$assign_method(&mut self, other);
                self
            }
        }

        impl std::ops::$trait<$type> for $type {
            type Output = $type;

            fn $method(mut self, other: $type) -> $type {
                std::ops::$assign_trait::$assign_method(&mut self, &other);
                self
            }
        }

        impl std::ops::$trait<$type> for &$type {
            type Output = $type;

            fn $method(self, other: $type) -> $type {
                let mut result = self.clone();
                std::ops::$assign_trait::$assign_method(&mut result, &other);
                result
            }
        }

        impl std::ops::$assign_trait<$type> for $type {
            fn $assign_method(&mut self, other: $type) {
                std::ops::$assign_trait::$assign_method(self, &other);
            }
        }
    };
}
pub(crate) use forward_binop;
