use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

/// Nuclease / PAM-recognition variant a candidate is designed for.
///
/// Only the SpCas9 NGG variant is recognized as a named variant; any other
/// string round-trips verbatim through [`Enzyme::Other`].
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub enum Enzyme {
    /// SpCas9 with NGG PAM.
    Cas9Ngg,
    /// Any other enzyme name, preserved as written.
    Other(String),
}

impl From<&str> for Enzyme {
    fn from(value: &str) -> Self {
        match value {
            "Cas9-NGG" => Enzyme::Cas9Ngg,
            other => Enzyme::Other(other.to_string()),
        }
    }
}

impl FromStr for Enzyme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Enzyme::from(s))
    }
}

impl Display for Enzyme {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Enzyme::Cas9Ngg => write!(f, "Cas9-NGG"),
            Enzyme::Other(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for Enzyme {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Enzyme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        Ok(Enzyme::from(s.as_str()))
    }
}

/// Strand orientation of the sgRNA target site.
///
/// Only the two canonical tokens are recognized; any other string
/// round-trips verbatim through [`Orientation::Other`], so upstream tools
/// with their own vocabulary keep their cells unchanged.
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub enum Orientation {
    Forward,
    Reverse,
    /// Any other orientation label, preserved as written.
    Other(String),
}

impl From<&str> for Orientation {
    fn from(value: &str) -> Self {
        match value {
            "forward" => Orientation::Forward,
            "reverse" => Orientation::Reverse,
            other => Orientation::Other(other.to_string()),
        }
    }
}

impl FromStr for Orientation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Orientation::from(s))
    }
}

impl Display for Orientation {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Orientation::Forward => write!(f, "forward"),
            Orientation::Reverse => write!(f, "reverse"),
            Orientation::Other(label) => write!(f, "{}", label),
        }
    }
}

impl Serialize for Orientation {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        Ok(Orientation::from(s.as_str()))
    }
}

/// Outcome of the linker design step for one record.
///
/// A record carries no status until the orchestrator has processed it; after
/// that it holds either the chosen linker sequence or an explicit failure
/// marker. The transition happens exactly once per record.
#[derive(Eq, Hash, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum LinkerStatus {
    /// Linker sequence chosen from the oracle output.
    Assigned(String),
    /// The oracle failed or returned no candidates.
    Failed,
}

impl LinkerStatus {
    /// Cell content for tabular output. Failures render as an empty cell.
    pub fn as_cell(&self) -> &str {
        match self {
            LinkerStatus::Assigned(linker) => linker.as_str(),
            LinkerStatus::Failed => "",
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, LinkerStatus::Assigned(_))
    }
}
