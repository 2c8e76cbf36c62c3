//! Runtime type tokens.
//!
//! A token identifies a Rust type by its `std::any::TypeId` and carries the
//! type name for display and export. Tokens are:
//! - Cheap to copy
//! - Compared by type identity only
//! - Serialized as the type name

use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a type at runtime.
#[derive(Debug, Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Capture the token for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying type identity.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path, e.g. `Person` for `app::model::Person`.
    ///
    /// Generic types keep their full name since their parameters carry paths too.
    pub fn short_name(&self) -> &'static str {
        if self.name.contains('<') {
            return self.name;
        }
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// Returns true if this token identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Serialize for TypeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// The bean type a cursor or declaration is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BeanType(TypeToken);

impl BeanType {
    /// Capture the bean type `T`.
    pub fn of<T: 'static>() -> Self {
        Self(TypeToken::of::<T>())
    }

    /// The token behind this bean type.
    pub fn token(&self) -> TypeToken {
        self.0
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl From<TypeToken> for BeanType {
    fn from(token: TypeToken) -> Self {
        BeanType(token)
    }
}

impl fmt::Display for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Helper macro to build a list of type tokens, e.g. for method parameters.
#[macro_export]
macro_rules! tokens {
    () => {
        ::std::vec::Vec::<$crate::TypeToken>::new()
    };
    ($($ty:ty),+ $(,)?) => {
        vec![$($crate::TypeToken::of::<$ty>()),+]
    };
}
