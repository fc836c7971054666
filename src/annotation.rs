//! Advisory annotations over buffer offsets
//!
//! Annotations are plain records. They are not re-indexed when edits shift
//! positions, so an annotation may drift from the region it once described.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::edit::EditError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl FromStr for Annotation {
    type Err = EditError;

    /// Parse `start,end,label`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let [start, end, label] = fields.as_slice() else {
            return Err(EditError::malformed(
                "annotate expects start,end,label (label without commas)",
            ));
        };

        let parse_offset = |field: &str, name: &str| {
            field
                .trim()
                .parse::<usize>()
                .map_err(|_| EditError::malformed(format!("annotate: invalid {name} offset '{field}'")))
        };
        let start = parse_offset(start, "start")?;
        let end = parse_offset(end, "end")?;
        if start > end {
            return Err(EditError::malformed(format!(
                "annotate: start {start} is after end {end}"
            )));
        }

        Ok(Self {
            start,
            end,
            label: label.trim().to_string(),
        })
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.start, self.end, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let ann: Annotation = "3, 9,promoter region".parse().unwrap();
        assert_eq!(
            ann,
            Annotation {
                start: 3,
                end: 9,
                label: "promoter region".to_string()
            }
        );
        assert_eq!(ann.to_string(), "3,9,promoter region");
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            "1,2".parse::<Annotation>(),
            Err(EditError::MalformedCommand(_))
        ));
        assert!(matches!(
            "1,2,a,b".parse::<Annotation>(),
            Err(EditError::MalformedCommand(_))
        ));
    }

    #[test]
    fn test_non_numeric_offsets() {
        assert!(matches!(
            "x,2,label".parse::<Annotation>(),
            Err(EditError::MalformedCommand(_))
        ));
        assert!(matches!(
            "1,-2,label".parse::<Annotation>(),
            Err(EditError::MalformedCommand(_))
        ));
    }

    #[test]
    fn test_reversed_offsets() {
        assert!("9,3,label".parse::<Annotation>().is_err());
    }
}
