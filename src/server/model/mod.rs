//! Domain models used between the data, service and controller layers.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary and
//! controllers convert them into DTOs with `into_dto()`. Game rules that need no database
//! access (power calculation, rarity draws, battle outcomes) live here as plain functions.

/// Declares a fieldless enum stored as a lowercase string column.
///
/// Generates `as_str`, `parse`, `from_stored` (which maps unknown stored values to
/// `AppError::InternalError`) and a `Display` impl.
macro_rules! string_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }

            #[allow(dead_code)]
            pub fn from_stored(value: &str) -> Result<Self, $crate::server::error::AppError> {
                Self::parse(value).ok_or_else(|| {
                    $crate::server::error::AppError::InternalError(format!(
                        "Unknown {} value '{}' in database",
                        stringify!($name),
                        value
                    ))
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod achievement;
pub mod agent;
pub mod battle;
pub mod card;
pub mod deck;
pub mod friend;
pub mod leaderboard;
pub mod message;
pub mod notification;
pub mod pack;
pub mod quest;
pub mod reward;
pub mod trade;
