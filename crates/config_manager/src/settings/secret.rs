//! Repository secrets and the events they are exposed to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;

/// Build event a secret is exposed to.
///
/// Literals that do not name a known event are kept verbatim in
/// [`Event::Other`] and sent to the server unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Event {
    Push,
    Tag,
    Deployment,
    PullRequest,
    Other(String),
}

impl Event {
    /// Events a secret receives when it is declared as a bare string.
    pub fn defaults() -> Vec<Event> {
        vec![Event::Push, Event::Tag]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::Tag => "tag",
            Self::Deployment => "deployment",
            Self::PullRequest => "pull_request",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Event {
    fn from(s: &str) -> Self {
        match s {
            "push" => Self::Push,
            "tag" => Self::Tag,
            "deployment" => Self::Deployment,
            "pull_request" => Self::PullRequest,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EventVisitor;

        // Scalars other than strings are kept as their textual form.
        impl<'de> Visitor<'de> for EventVisitor {
            type Value = Event;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an event name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Event, E> {
                Ok(Event::from(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Event, E> {
                Ok(Event::from(v.to_string().as_str()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Event, E> {
                Ok(Event::from(v.to_string().as_str()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Event, E> {
                Ok(Event::from(v.to_string().as_str()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Event, E> {
                Ok(Event::from(v.to_string().as_str()))
            }
        }

        deserializer.deserialize_any(EventVisitor)
    }
}

/// A secret declared on a repository.
///
/// Two document shapes decode into this one type:
///
/// **Shorthand** - a bare value, exposed to `push` and `tag`:
/// ```yaml
/// secrets:
///   docker_password: hunter2
/// ```
///
/// **Structured** - `value` is required, `events` is optional and defaults
/// to no events at all:
/// ```yaml
/// secrets:
///   deploy_key:
///     value: abc123
///     events: [deployment]
/// ```
///
/// `name` is not part of either shape. It is filled in from the map key after
/// the document is parsed and is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Secret {
    #[serde(skip)]
    pub name: String,

    pub value: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

impl Secret {
    /// Creates a secret exposed to the default events (`push`, `tag`).
    pub fn with_default_events(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            events: Event::defaults(),
        }
    }
}

// Custom deserialization to support both the shorthand and structured shapes
impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, IgnoredAny, MapAccess, Visitor};

        struct SecretVisitor;

        impl<'de> Visitor<'de> for SecretVisitor {
            type Value = Secret;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a secret value or a map with `value` and `events`")
            }

            // Handle shorthand format: the value itself
            fn visit_str<E: de::Error>(self, v: &str) -> Result<Secret, E> {
                Ok(Secret::with_default_events(String::new(), v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Secret, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Secret, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Secret, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Secret, E> {
                self.visit_str(&v.to_string())
            }

            // Handle structured format: { value = X, events = [...] }
            fn visit_map<V>(self, mut map: V) -> Result<Secret, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<String> = None;
                let mut events: Option<Vec<Event>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "value" => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        "events" => {
                            if events.is_some() {
                                return Err(de::Error::duplicate_field("events"));
                            }
                            events = Some(map.next_value::<EventList>()?.0);
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                Ok(Secret {
                    name: String::new(),
                    value,
                    events: events.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(SecretVisitor)
    }
}

/// The `events` entry of a structured secret. Anything but a sequence is an
/// `invalid type` error.
struct EventList(Vec<Event>);

impl<'de> Deserialize<'de> for EventList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        struct EventListVisitor;

        impl<'de> Visitor<'de> for EventListVisitor {
            type Value = EventList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of event names")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<EventList, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut events = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(event) = seq.next_element::<Event>()? {
                    events.push(event);
                }
                Ok(EventList(events))
            }
        }

        deserializer.deserialize_seq(EventListVisitor)
    }
}
