//! Reader type to SQL column type mapping

use crate::error::UnmappedType;
use crate::model::ScalarType;

/// SQL column type for a reader type
pub fn sql_type(scalar_type: &ScalarType) -> Result<&'static str, UnmappedType> {
    let sql = match scalar_type {
        ScalarType::UInt32 => "bigint",
        ScalarType::Int32 => "integer",
        ScalarType::SByte => "smallint",
        ScalarType::Byte => "smallint",
        ScalarType::Str => "TEXT",
        ScalarType::Boolean => "boolean",
        ScalarType::UInt16 => "integer",
        ScalarType::Int16 => "smallint",
        ScalarType::Single => "float",
        ScalarType::Double => "double",
        ScalarType::Quad => "bigint",
        ScalarType::Int64 | ScalarType::UInt64 | ScalarType::Other(_) => {
            return Err(UnmappedType {
                type_name: scalar_type.name().to_string(),
            })
        }
    };
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        let cases = [
            (ScalarType::UInt32, "bigint"),
            (ScalarType::Int32, "integer"),
            (ScalarType::SByte, "smallint"),
            (ScalarType::Byte, "smallint"),
            (ScalarType::Str, "TEXT"),
            (ScalarType::Boolean, "boolean"),
            (ScalarType::UInt16, "integer"),
            (ScalarType::Int16, "smallint"),
            (ScalarType::Single, "float"),
            (ScalarType::Double, "double"),
            (ScalarType::Quad, "bigint"),
        ];
        for (ty, expected) in cases {
            assert_eq!(sql_type(&ty), Ok(expected), "{ty}");
        }
    }

    #[test]
    fn test_unmapped_types() {
        let err = sql_type(&ScalarType::Int64).unwrap_err();
        assert_eq!(err.type_name, "i64");

        let err = sql_type(&ScalarType::Other("Vector3".into())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "the type Vector3 doesn't have an SQL type mapping"
        );
    }
}
