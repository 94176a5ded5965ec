//! Search query construction

#[cfg(test)]
mod tests {
    use crate::query_builder::{build_property_search, PropertyFilter, DEFAULT_RESULT_LIMIT};
    use serde_json::json;

    /// Placeholder indices in order of appearance in the statement text
    fn placeholder_indices(sql: &str) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut chars = sql.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                continue;
            }
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            indices.push(digits.parse().expect("placeholder without index"));
        }

        indices
    }

    /// Filter with the given subset of predicate fields set, driven by bits
    /// 0..=4: owner, city, minimum price, maximum price, minimum rating
    fn filter_from_bits(bits: u32) -> PropertyFilter {
        let mut filter = PropertyFilter::new();
        if bits & 1 != 0 {
            filter = filter.with_owner_id(7);
        }
        if bits & 2 != 0 {
            filter = filter.with_city("Vancouver");
        }
        if bits & 4 != 0 {
            filter = filter.with_minimum_price_per_night(5_000);
        }
        if bits & 8 != 0 {
            filter = filter.with_maximum_price_per_night(20_000);
        }
        if bits & 16 != 0 {
            filter = filter.with_minimum_rating(4.0);
        }
        filter
    }

    // ========================================
    // Placeholder / Value Alignment
    // ========================================

    #[test]
    fn test_placeholders_dense_for_every_filter_combination() {
        for bits in 0..32 {
            let filter = filter_from_bits(bits);
            let plan = build_property_search(&filter, Some(25));

            let indices = placeholder_indices(&plan.sql);
            let expected: Vec<usize> = (1..=plan.values.len()).collect();

            assert_eq!(
                indices, expected,
                "combination {:#07b} produced gapped or reordered placeholders: {}",
                bits, plan.sql
            );
        }
    }

    #[test]
    fn test_value_count_matches_predicate_count() {
        for bits in 0..32 {
            let filter = filter_from_bits(bits);
            let plan = build_property_search(&filter, None);

            // one value per set field, plus the always-bound limit
            assert_eq!(plan.values.len(), bits.count_ones() as usize + 1);
        }
    }

    #[test]
    fn test_values_follow_filter_precedence_order() {
        let filter = filter_from_bits(0b11111);
        let plan = build_property_search(&filter, Some(3));

        assert_eq!(
            plan.values,
            vec![
                json!(7),
                json!("%Vancouver%"),
                json!(5_000),
                json!(20_000),
                json!(4.0),
                json!(3),
            ]
        );
    }

    // ========================================
    // Keyword Selection (WHERE vs AND)
    // ========================================

    #[test]
    fn test_empty_filter_has_no_predicate_keywords() {
        let plan = build_property_search(&PropertyFilter::new(), None);

        assert!(!plan.sql.contains("WHERE"));
        assert!(!plan.sql.contains("AND"));
        assert!(!plan.sql.contains("HAVING"));
    }

    #[test]
    fn test_single_predicate_uses_where() {
        let single_field_filters = [
            PropertyFilter::new().with_owner_id(1),
            PropertyFilter::new().with_city("York"),
            PropertyFilter::new().with_minimum_price_per_night(100),
            PropertyFilter::new().with_maximum_price_per_night(100),
        ];

        for filter in single_field_filters {
            let plan = build_property_search(&filter, None);

            assert_eq!(plan.sql.matches("WHERE").count(), 1, "{}", plan.sql);
            assert_eq!(plan.sql.matches("AND").count(), 0, "{}", plan.sql);
        }
    }

    #[test]
    fn test_later_predicates_use_and() {
        for bits in 0..16u32 {
            let predicates = bits.count_ones() as usize;
            if predicates < 2 {
                continue;
            }

            let plan = build_property_search(&filter_from_bits(bits), None);

            assert_eq!(plan.sql.matches("WHERE").count(), 1, "{}", plan.sql);
            assert_eq!(plan.sql.matches("AND").count(), predicates - 1, "{}", plan.sql);
        }
    }

    #[test]
    fn test_predicates_keep_fixed_precedence_order() {
        let plan = build_property_search(&filter_from_bits(0b1111), None);

        let owner = plan.sql.find("owner_id =").unwrap();
        let city = plan.sql.find("city LIKE").unwrap();
        let minimum = plan.sql.find("cost_per_night >=").unwrap();
        let maximum = plan.sql.find("cost_per_night <=").unwrap();

        assert!(owner < city && city < minimum && minimum < maximum);
    }

    // ========================================
    // City Wildcarding
    // ========================================

    #[test]
    fn test_city_bound_with_both_side_wildcards() {
        let filter = PropertyFilter::new().with_city("Vancouver");
        let plan = build_property_search(&filter, None);

        assert_eq!(plan.values[0], json!("%Vancouver%"));
        assert!(plan.sql.contains("city LIKE $1"));
    }

    #[test]
    fn test_city_substring_match_preserves_inner_text() {
        let filter = PropertyFilter::new().with_city("ancouv");
        let plan = build_property_search(&filter, None);

        assert_eq!(plan.values[0], json!("%ancouv%"));
    }

    // ========================================
    // Grouping and HAVING
    // ========================================

    #[test]
    fn test_group_by_follows_all_where_predicates() {
        let plan = build_property_search(&filter_from_bits(0b1111), None);

        let group = plan.sql.find("GROUP BY properties.id").unwrap();
        let last_predicate = plan.sql.find("cost_per_night <=").unwrap();

        assert!(group > last_predicate);
    }

    #[test]
    fn test_minimum_rating_always_uses_having() {
        for bits in 0..16u32 {
            let filter = filter_from_bits(bits).with_minimum_rating(3.5);
            let plan = build_property_search(&filter, None);

            assert_eq!(plan.sql.matches("HAVING").count(), 1, "{}", plan.sql);
            assert!(!plan.sql.contains("AND AVG"), "{}", plan.sql);

            let group = plan.sql.find("GROUP BY properties.id").unwrap();
            let having = plan.sql.find("HAVING").unwrap();
            assert!(having > group);
        }
    }

    #[test]
    fn test_rating_predicate_binds_after_where_values() {
        let filter = PropertyFilter::new()
            .with_city("Toronto")
            .with_minimum_rating(4.5);
        let plan = build_property_search(&filter, None);

        assert_eq!(plan.values[1], json!(4.5));
        assert!(plan.sql.contains("HAVING AVG(property_reviews.rating) >= $2"));
    }

    // ========================================
    // Limit Handling
    // ========================================

    #[test]
    fn test_limit_defaults_to_ten() {
        let plan = build_property_search(&PropertyFilter::new(), None);

        assert_eq!(DEFAULT_RESULT_LIMIT, 10);
        assert_eq!(plan.values.last(), Some(&json!(10)));
    }

    #[test]
    fn test_limit_always_bound_last() {
        for bits in 0..32 {
            let plan = build_property_search(&filter_from_bits(bits), Some(42));

            let last_index = plan.values.len();
            assert_eq!(plan.values.last(), Some(&json!(42)));
            assert!(
                plan.sql.ends_with(&format!("ORDER BY cost_per_night LIMIT ${last_index}")),
                "{}",
                plan.sql
            );
        }
    }

    // ========================================
    // Representative Searches
    // ========================================

    #[test]
    fn test_scenario_unfiltered_listing() {
        let plan = build_property_search(&PropertyFilter::new(), None);

        assert_eq!(
            plan.sql,
            "SELECT properties.*, \
             AVG(property_reviews.rating)::float8 AS average_rating \
             FROM properties \
             JOIN property_reviews ON properties.id = property_reviews.property_id \
             GROUP BY properties.id \
             ORDER BY cost_per_night LIMIT $1"
        );
        assert_eq!(plan.values, vec![json!(10)]);
    }

    #[test]
    fn test_scenario_city_only() {
        let filter = PropertyFilter::new().with_city("York");
        let plan = build_property_search(&filter, None);

        assert!(plan.sql.contains("WHERE city LIKE $1"));
        assert_eq!(plan.values, vec![json!("%York%"), json!(10)]);
    }

    #[test]
    fn test_scenario_owner_and_rating() {
        let filter = PropertyFilter::new().with_owner_id(7).with_minimum_rating(4.0);
        let plan = build_property_search(&filter, Some(5));

        assert!(plan.sql.contains("WHERE owner_id = $1"));
        assert!(plan.sql.contains("HAVING AVG(property_reviews.rating) >= $2"));
        assert!(plan.sql.contains("LIMIT $3"));
        assert_eq!(plan.values, vec![json!(7), json!(4.0), json!(5)]);
    }

    #[test]
    fn test_scenario_price_range() {
        let filter = PropertyFilter::new()
            .with_minimum_price_per_night(50)
            .with_maximum_price_per_night(200);
        let plan = build_property_search(&filter, None);

        assert!(plan.sql.contains("WHERE cost_per_night >= $1"));
        assert!(plan.sql.contains("AND cost_per_night <= $2"));
        assert_eq!(plan.values, vec![json!(50), json!(200), json!(10)]);
    }

    // ========================================
    // PropertyFilter
    // ========================================

    #[test]
    fn test_filter_builder_sets_fields() {
        let filter = PropertyFilter::new()
            .with_owner_id(3)
            .with_city("Calgary")
            .with_minimum_price_per_night(1_000)
            .with_maximum_price_per_night(9_000)
            .with_minimum_rating(2.5);

        assert_eq!(filter.owner_id, Some(3));
        assert_eq!(filter.city.as_deref(), Some("Calgary"));
        assert_eq!(filter.minimum_price_per_night, Some(1_000));
        assert_eq!(filter.maximum_price_per_night, Some(9_000));
        assert_eq!(filter.minimum_rating, Some(2.5));
    }

    #[test]
    fn test_filter_is_empty() {
        assert!(PropertyFilter::new().is_empty());
        assert!(PropertyFilter::default().is_empty());
        assert!(!PropertyFilter::new().with_city("York").is_empty());
        assert!(!PropertyFilter::new().with_minimum_rating(1.0).is_empty());
    }

    #[test]
    fn test_filter_roundtrips_through_json() {
        let filter = PropertyFilter::new().with_city("Montreal").with_owner_id(9);

        let encoded = serde_json::to_string(&filter).unwrap();
        let decoded: PropertyFilter = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, filter);
    }
}
