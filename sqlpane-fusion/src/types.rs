use arrow::datatypes::DataType;

/// Glyph returned for any type outside the display table.
pub const UNKNOWN_TYPE_LABEL: &str = "?";

/// Map an engine column type to its fixed-width display glyph.
///
/// Total over [`DataType`] with no side effects: every type in the table
/// below gets its glyph, everything else falls back to
/// [`UNKNOWN_TYPE_LABEL`]. This is a closed enumeration, not a computed
/// mapping; supporting a new engine type means adding an arm.
pub fn display_type(data_type: &DataType) -> &'static str {
    match data_type {
        DataType::Null => "nul",
        DataType::Boolean => "t/f",
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => "##",
        DataType::Float16 | DataType::Float32 | DataType::Float64 => "#.#",
        DataType::Decimal128(_, _) => "#.#",
        DataType::Time32(_) | DataType::Time64(_) => "t",
        DataType::Date32 | DataType::Date64 => "d",
        DataType::Timestamp(_, _) => "ts",
        DataType::Interval(_) => "iv",
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => "s",
        DataType::Binary | DataType::LargeBinary | DataType::BinaryView => "b",
        _ => UNKNOWN_TYPE_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::datatypes::{DataType, Field, IntervalUnit, TimeUnit};

    use super::*;

    #[test]
    fn integer_widths_collapse_to_one_glyph() {
        for dt in [
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::UInt8,
            DataType::UInt16,
            DataType::UInt32,
            DataType::UInt64,
        ] {
            assert_eq!(display_type(&dt), "##", "glyph for {dt:?}");
        }
    }

    #[test]
    fn floats_and_decimal_share_a_glyph() {
        for dt in [
            DataType::Float16,
            DataType::Float32,
            DataType::Float64,
            DataType::Decimal128(38, 10),
        ] {
            assert_eq!(display_type(&dt), "#.#", "glyph for {dt:?}");
        }
    }

    #[test]
    fn temporal_variants() {
        assert_eq!(display_type(&DataType::Date32), "d");
        assert_eq!(display_type(&DataType::Date64), "d");
        assert_eq!(display_type(&DataType::Time32(TimeUnit::Millisecond)), "t");
        assert_eq!(display_type(&DataType::Time64(TimeUnit::Nanosecond)), "t");
        assert_eq!(
            display_type(&DataType::Timestamp(TimeUnit::Nanosecond, None)),
            "ts"
        );
        assert_eq!(
            display_type(&DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into()))),
            "ts"
        );
        assert_eq!(
            display_type(&DataType::Interval(IntervalUnit::MonthDayNano)),
            "iv"
        );
    }

    #[test]
    fn string_and_binary_variants_include_large_and_view() {
        for dt in [DataType::Utf8, DataType::LargeUtf8, DataType::Utf8View] {
            assert_eq!(display_type(&dt), "s", "glyph for {dt:?}");
        }
        for dt in [DataType::Binary, DataType::LargeBinary, DataType::BinaryView] {
            assert_eq!(display_type(&dt), "b", "glyph for {dt:?}");
        }
    }

    #[test]
    fn null_and_boolean() {
        assert_eq!(display_type(&DataType::Null), "nul");
        assert_eq!(display_type(&DataType::Boolean), "t/f");
    }

    #[test]
    fn types_outside_the_table_fall_back() {
        let list = DataType::List(Arc::new(Field::new("item", DataType::Int64, true)));
        for dt in [
            DataType::Decimal256(76, 10),
            DataType::Duration(TimeUnit::Millisecond),
            DataType::FixedSizeBinary(16),
            list,
        ] {
            assert_eq!(display_type(&dt), UNKNOWN_TYPE_LABEL, "fallback for {dt:?}");
        }
    }
}
