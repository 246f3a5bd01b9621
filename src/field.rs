use serde::{Serialize, Deserialize};

/// A single positional field of an APDL command.
/// `Unset` is written as an empty field, which MAPDL reads as "use the default".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// Blank field.
    #[default]
    Unset,
    /// Integer field (entity numbers, counts, keys).
    Int(i64),
    /// Real field (coordinates, radii, angles).
    /// NaN and infinities are written as `NaN`/`inf`, which MAPDL rejects.
    Real(f64),
    /// Text field (labels, component names, file names, parameter expressions).
    Text(String),
}
impl Field {
    /// Check if the field is blank.
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Unset => Ok(()),
            Field::Int(value) => write!(f, "{}", value),
            // Debug keeps the decimal point and switches to exponent form for very large/small values
            Field::Real(value) => write!(f, "{:?}", value),
            Field::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Int(value)
    }
}
impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Int(value as i64)
    }
}
impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Field::Int(value as i64)
    }
}
impl From<u64> for Field {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Field::Int(value),
            Err(_) => Field::Text(value.to_string()),
        }
    }
}
impl From<usize> for Field {
    fn from(value: usize) -> Self {
        Field::from(value as u64)
    }
}
impl From<f64> for Field {
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            log::warn!("Non-finite real field {:?} is not a valid APDL number", value);
        }
        Field::Real(value)
    }
}
impl From<f32> for Field {
    /// Widened through the shortest `f32` text, so `0.1f32` is written as `0.1`.
    fn from(value: f32) -> Self {
        Field::from(value.to_string().parse::<f64>().unwrap_or(value as f64))
    }
}
impl From<&str> for Field {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Field::Unset
        } else {
            Field::Text(value.to_string())
        }
    }
}
impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::from(value.as_str())
    }
}
impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Field::Unset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_blank() {
        assert_eq!(Field::Unset.to_string(), "");
        assert_eq!(Field::from(""), Field::Unset);
        assert_eq!(Field::from(None::<f64>), Field::Unset);
    }

    #[test]
    fn reals_keep_their_decimal_point() {
        assert_eq!(Field::from(1.0).to_string(), "1.0");
        assert_eq!(Field::from(0.5).to_string(), "0.5");
        assert_eq!(Field::from(-2.25).to_string(), "-2.25");
        assert_eq!(Field::from(1e-20).to_string(), "1e-20");
    }

    #[test]
    fn single_precision_reals_use_their_shortest_form() {
        assert_eq!(Field::from(0.1f32), Field::Real(0.1));
        assert_eq!(Field::from(0.1f32).to_string(), "0.1");
        assert_eq!(Field::from(2.3f32).to_string(), "2.3");
        assert_eq!(Field::from(-1.5e-7f32).to_string(), "-1.5e-7");
        assert_eq!(Field::from(3f32).to_string(), "3.0");
    }

    #[test]
    fn non_finite_reals_are_kept() {
        assert!(matches!(Field::from(f64::NAN), Field::Real(value) if value.is_nan()));
        assert_eq!(Field::from(f32::INFINITY), Field::Real(f64::INFINITY));
        assert_eq!(Field::from(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn integers_and_text() {
        assert_eq!(Field::from(12).to_string(), "12");
        assert_eq!(Field::from(-3i64).to_string(), "-3");
        assert_eq!(Field::from("SOLID185").to_string(), "SOLID185");
        assert_eq!(Field::from(String::from("ALL")), Field::Text("ALL".to_string()));
    }

    #[test]
    fn deserializes_from_plain_values() {
        let fields: Vec<Field> = serde_json::from_str(r#"[null, 1, 2.5, "ALL"]"#).unwrap();
        assert_eq!(fields, vec![
            Field::Unset,
            Field::Int(1),
            Field::Real(2.5),
            Field::Text("ALL".to_string()),
        ]);
    }
}
