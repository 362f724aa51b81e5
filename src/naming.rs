//! Identifier formatting

/// Convert a snake_case column name into a PascalCase property name
///
/// Each underscore-separated segment gets its first character uppercased and
/// keeps the rest untouched, so `user_id` becomes `UserId` and `a_b_c` becomes
/// `ABC`. Empty segments from leading, trailing or doubled underscores
/// contribute nothing.
pub fn to_pascal_case(raw: &str) -> String {
    raw.split('_')
        .map(|s| {
            let mut chars = s.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::to_pascal_case;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_pascal_case("user_id"), "UserId");
        assert_eq!(to_pascal_case("name"), "Name");
        assert_eq!(to_pascal_case("a_b_c"), "ABC");
    }

    #[test]
    fn test_rest_of_segment_kept() {
        assert_eq!(to_pascal_case("createdAt_utc"), "CreatedAtUtc");
        assert_eq!(to_pascal_case("ID"), "ID");
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(to_pascal_case("_id"), "Id");
        assert_eq!(to_pascal_case("user__id"), "UserId");
        assert_eq!(to_pascal_case("id_"), "Id");
        assert_eq!(to_pascal_case(""), "");
    }
}
