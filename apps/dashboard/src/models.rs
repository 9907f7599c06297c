use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed set of labels an incident can be classified under.
///
/// Every category renders and parses through the same label the mock API
/// puts on the wire, so dropdown keys, table cells and JSON agree.
pub trait Category: Copy + Eq + fmt::Display + FromStr<Err = ParseCategoryError> + 'static {
    const AXIS: &'static str;
    const VARIANTS: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {axis} label: {value:?}")]
pub struct ParseCategoryError {
    pub axis: &'static str,
    pub value: String,
}

fn parse_label<T: Category>(value: &str) -> Result<T, ParseCategoryError> {
    let trimmed = value.trim();
    T::VARIANTS
        .iter()
        .copied()
        .find(|variant| variant.label() == trimmed)
        .ok_or_else(|| ParseCategoryError {
            axis: T::AXIS,
            value: value.to_string(),
        })
}

macro_rules! category {
    ($name:ident, $axis:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Category for $name {
            const AXIS: &'static str = $axis;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseCategoryError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                parse_label(value)
            }
        }
    };
}

category!(Product, "product", {
    A => "Product A",
    B => "Product B",
    C => "Product C",
});

category!(Status, "status", {
    Open => "Open",
    Closed => "Closed",
    Pending => "Pending",
});

category!(Action, "action", {
    Action1 => "Action 1",
    Action2 => "Action 2",
    Action3 => "Action 3",
});

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: u32,
    pub product: Product,
    pub status: Status,
    pub action: Action,
}
