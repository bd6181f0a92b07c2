use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything that can be read as an id of type `Id`.
pub trait AsId<Id> {
    fn as_id(&self) -> Id;
}

macro_rules! string_ids {
    ($($(#[$meta:meta])* $name:ident),+$(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self::new(value)
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl AsId<$name> for $name {
                fn as_id(&self) -> $name {
                    self.clone()
                }
            }

            impl AsId<$name> for &$name {
                fn as_id(&self) -> $name {
                    (*self).clone()
                }
            }

            impl AsId<$name> for &str {
                fn as_id(&self) -> $name {
                    $name::new(*self)
                }
            }
        )+
    };
}

string_ids! {
    /// A chat platform user.
    UserId,
    /// A group chat, which hosts at most one game.
    GroupId,
    /// Handle the platform gives us to answer a single inbound event.
    ReplyToken,
}

#[cfg(test)]
mod tests {
    use super::{AsId, GroupId, UserId};
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_raw_id() {
        assert_eq!(UserId::new("U1234").to_string(), "U1234");
    }

    #[test]
    fn str_as_id() {
        let group: GroupId = "C99".as_id();
        assert_eq!(group, GroupId::from("C99"));
    }

    #[test]
    fn transparent_serde() {
        let user: UserId = serde_json::from_str("\"Uabc\"").expect("valid json string");
        assert_eq!(user.as_str(), "Uabc");
        assert_eq!(serde_json::to_string(&user).expect("serializes"), "\"Uabc\"");
    }
}
