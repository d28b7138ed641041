use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::{analyzer::AnalyzerError, schema::ExprType};

/// Case-insensitive aggregate names; routed through aggregate typing rules.
static AGGREGATE_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["count", "sum", "avg", "min", "max"]));

pub struct TypeInference;

impl TypeInference {
    pub fn is_aggregate_name(name: &str) -> bool {
        AGGREGATE_NAMES.contains(name.to_ascii_lowercase().as_str())
    }

    /// Return type of a named call from its argument types.
    pub fn infer_function(name: &str, arg_types: &[ExprType]) -> Result<ExprType, AnalyzerError> {
        if Self::is_aggregate_name(name) {
            return Self::infer_aggregate(name, arg_types);
        }

        let lname = name.to_ascii_lowercase();
        match (lname.as_str(), arg_types) {
            // UPPER(s), LOWER(s), TRIM(s) -> String
            ("upper", [ExprType::String])
            | ("lower", [ExprType::String])
            | ("trim", [ExprType::String]) => Ok(ExprType::String),

            // LENGTH(s) -> Int
            ("length", [ExprType::String]) => Ok(ExprType::Int),

            // COALESCE(a, b, ...) -> promoted type of the arguments
            ("coalesce", many) if !many.is_empty() => {
                let mut ty = many[0];
                for t in many.iter().copied() {
                    ty = ExprType::promote(ty, t);
                }
                Ok(ty)
            }

            ("upper" | "lower" | "trim" | "length", got) => Err(AnalyzerError::FunctionArgMismatch {
                name: name.to_string(),
                expected: "(string)".to_string(),
                got: got.to_vec(),
            }),
            ("coalesce", got) => Err(AnalyzerError::FunctionArgMismatch {
                name: name.to_string(),
                expected: "at least one argument".to_string(),
                got: got.to_vec(),
            }),

            _ => Err(AnalyzerError::FunctionNotFound(name.to_string())),
        }
    }

    fn infer_aggregate(name: &str, arg_types: &[ExprType]) -> Result<ExprType, AnalyzerError> {
        let lname = name.to_ascii_lowercase();
        match (lname.as_str(), arg_types) {
            ("count", _) => Ok(ExprType::Int),
            ("sum", [ExprType::Int]) => Ok(ExprType::Int),
            ("sum", [ExprType::Float]) => Ok(ExprType::Float),
            ("avg", [ExprType::Int | ExprType::Float]) => Ok(ExprType::Float),
            ("min" | "max", [t])
                if matches!(t, ExprType::Int | ExprType::Float | ExprType::String) =>
            {
                Ok(*t)
            }
            (_, got) => Err(AnalyzerError::FunctionArgMismatch {
                name: name.to_string(),
                expected: "a numeric argument".to_string(),
                got: got.to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_string_functions_type_check() {
        assert_eq!(
            TypeInference::infer_function("upper", &[ExprType::String]),
            Ok(ExprType::String)
        );
        assert_eq!(
            TypeInference::infer_function("LENGTH", &[ExprType::String]),
            Ok(ExprType::Int)
        );
    }

    #[test]
    fn length_of_non_string_is_a_mismatch() {
        let err = TypeInference::infer_function("length", &[ExprType::Int]).unwrap_err();
        assert!(matches!(err, AnalyzerError::FunctionArgMismatch { .. }));
    }

    #[test]
    fn coalesce_promotes_its_argument_types() {
        assert_eq!(
            TypeInference::infer_function("coalesce", &[ExprType::Int, ExprType::Float]),
            Ok(ExprType::Float)
        );
        assert_eq!(
            TypeInference::infer_function("coalesce", &[ExprType::Null, ExprType::String]),
            Ok(ExprType::String)
        );
    }

    #[test]
    fn aggregate_typing_matches_the_registry_rules() {
        assert!(TypeInference::is_aggregate_name("AVG"));
        assert_eq!(TypeInference::infer_function("count", &[ExprType::String]), Ok(ExprType::Int));
        assert_eq!(TypeInference::infer_function("sum", &[ExprType::Int]), Ok(ExprType::Int));
        assert_eq!(TypeInference::infer_function("avg", &[ExprType::Int]), Ok(ExprType::Float));
        assert_eq!(
            TypeInference::infer_function("max", &[ExprType::String]),
            Ok(ExprType::String)
        );
        assert!(matches!(
            TypeInference::infer_function("sum", &[ExprType::String]),
            Err(AnalyzerError::FunctionArgMismatch { .. })
        ));
    }

    #[test]
    fn unknown_names_fail_with_function_not_found() {
        assert_eq!(
            TypeInference::infer_function("frobnicate", &[]),
            Err(AnalyzerError::FunctionNotFound("frobnicate".into()))
        );
    }
}
