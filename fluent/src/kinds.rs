//! Built-in constraint kinds and their typed attribute setters.

use crate::{ConstraintDef, ConstraintKind};

macro_rules! constraint_kinds {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl ConstraintKind for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

constraint_kinds! {
    /// Value must be false.
    AssertFalse,
    /// Value must be true.
    AssertTrue,
    /// Decimal value must not exceed `value`.
    DecimalMax,
    /// Decimal value must be at least `value`.
    DecimalMin,
    /// Number must have at most `integer` integral and `fraction` fractional digits.
    Digits,
    /// String must be an email address.
    Email,
    /// Date must lie in the future.
    Future,
    /// String length must lie within `min..=max`.
    Length,
    /// Number must not exceed `value`.
    Max,
    /// Number must be at least `value`.
    Min,
    /// String must contain a non-whitespace character.
    NotBlank,
    /// Value must not be empty.
    NotEmpty,
    /// Value must be present.
    NotNull,
    /// Value must be absent.
    Null,
    /// Date must lie in the past.
    Past,
    /// String must match `regexp`.
    Pattern,
    /// Number must lie within `min..=max`.
    Range,
    /// Collection or string size must lie within `min..=max`.
    Size,
}

impl ConstraintDef<'_, Min> {
    pub fn value(self, value: i64) -> Self {
        self.param("value", value)
    }
}

impl ConstraintDef<'_, Max> {
    pub fn value(self, value: i64) -> Self {
        self.param("value", value)
    }
}

impl ConstraintDef<'_, DecimalMin> {
    pub fn value(self, value: impl Into<String>) -> Self {
        self.param("value", value.into())
    }

    pub fn inclusive(self, inclusive: bool) -> Self {
        self.param("inclusive", inclusive)
    }
}

impl ConstraintDef<'_, DecimalMax> {
    pub fn value(self, value: impl Into<String>) -> Self {
        self.param("value", value.into())
    }

    pub fn inclusive(self, inclusive: bool) -> Self {
        self.param("inclusive", inclusive)
    }
}

impl ConstraintDef<'_, Digits> {
    pub fn integer(self, digits: u32) -> Self {
        self.param("integer", digits)
    }

    pub fn fraction(self, digits: u32) -> Self {
        self.param("fraction", digits)
    }
}

impl ConstraintDef<'_, Size> {
    pub fn min(self, min: i64) -> Self {
        self.param("min", min)
    }

    pub fn max(self, max: i64) -> Self {
        self.param("max", max)
    }
}

impl ConstraintDef<'_, Length> {
    pub fn min(self, min: i64) -> Self {
        self.param("min", min)
    }

    pub fn max(self, max: i64) -> Self {
        self.param("max", max)
    }
}

impl ConstraintDef<'_, Range> {
    pub fn min(self, min: i64) -> Self {
        self.param("min", min)
    }

    pub fn max(self, max: i64) -> Self {
        self.param("max", max)
    }
}

impl ConstraintDef<'_, Pattern> {
    pub fn regexp(self, regexp: impl Into<String>) -> Self {
        self.param("regexp", regexp.into())
    }
}

impl ConstraintDef<'_, Email> {
    /// Additional expression the address must match.
    pub fn regexp(self, regexp: impl Into<String>) -> Self {
        self.param("regexp", regexp.into())
    }
}
