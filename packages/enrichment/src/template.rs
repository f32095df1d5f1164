//! Query generation by placeholder substitution.
//!
//! The template carries a user-chosen token wrapped in braces (`{company}`).
//! Substitution is literal substring replacement: no escaping, no recursive
//! expansion, no regex. A placeholder that is empty or never occurs in the
//! template yields the template verbatim, once per row.

/// Wrap a raw token in the placeholder delimiters: `company` → `{company}`.
pub fn wrap_placeholder(token: &str) -> String {
    format!("{{{}}}", token)
}

/// Produce one query per value by replacing every occurrence of
/// `placeholder` in `template` with that value.
///
/// Output order matches `values` order and output length equals
/// `values.len()` unconditionally.
pub fn generate_queries(template: &str, placeholder: &str, values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| {
            if placeholder.is_empty() {
                template.to_string()
            } else {
                template.replace(placeholder, value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn substitutes_each_value() {
        let queries = generate_queries("Get email of {x}", "{x}", &owned(&["ACME"]));
        assert_eq!(queries, vec!["Get email of ACME"]);
    }

    #[test]
    fn one_query_per_value_in_order() {
        let queries = generate_queries(
            "Find HQ of {company}",
            "{company}",
            &owned(&["Acme", "Globex", "Initech"]),
        );
        assert_eq!(
            queries,
            vec![
                "Find HQ of Acme",
                "Find HQ of Globex",
                "Find HQ of Initech"
            ]
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let queries = generate_queries("{x} vs {x}", "{x}", &owned(&["Acme"]));
        assert_eq!(queries, vec!["Acme vs Acme"]);
    }

    #[test]
    fn absent_placeholder_passes_template_through() {
        let queries = generate_queries("Find HQ of Acme", "{company}", &owned(&["a", "b"]));
        assert_eq!(queries, vec!["Find HQ of Acme", "Find HQ of Acme"]);
    }

    #[test]
    fn empty_placeholder_passes_template_through() {
        let queries = generate_queries("Find HQ", "", &owned(&["a"]));
        assert_eq!(queries, vec!["Find HQ"]);
    }

    #[test]
    fn empty_values_yield_no_queries() {
        let queries = generate_queries("Find {x}", "{x}", &[]);
        assert!(queries.is_empty());
    }

    #[test]
    fn wraps_token_in_braces() {
        assert_eq!(wrap_placeholder("company"), "{company}");
        assert_eq!(wrap_placeholder(""), "{}");
    }
}
