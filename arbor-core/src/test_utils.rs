//! Shared test utilities for `arbor-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of cases per property.
pub(crate) const PROPTEST_CASES_ENV_KEY: &str = "ARBOR_PROPTEST_CASES";

/// Builds the proptest configuration shared by every property suite.
///
/// `ARBOR_PROPTEST_CASES` overrides `default_cases`; unparsable or zero
/// values are logged and ignored.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: read_cases(env::var(PROPTEST_CASES_ENV_KEY).ok().as_deref(), default_cases),
        ..ProptestConfig::default()
    }
}

fn read_cases(raw: Option<&str>, default_cases: u32) -> u32 {
    let Some(raw) = raw else {
        return default_cases;
    };
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => cases,
        Ok(_) => {
            tracing::warn!(env = PROPTEST_CASES_ENV_KEY, raw, "cases must be > 0; using default");
            default_cases
        }
        Err(error) => {
            tracing::warn!(
                env = PROPTEST_CASES_ENV_KEY,
                raw,
                %error,
                "invalid property-test case override; using default",
            );
            default_cases
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::read_cases;

    #[rstest]
    #[case::unset(None, 64)]
    #[case::override_value(Some("12"), 12)]
    #[case::padded(Some(" 7 "), 7)]
    #[case::zero(Some("0"), 64)]
    #[case::garbage(Some("many"), 64)]
    fn resolves_case_count(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(read_cases(raw, 64), expected);
    }
}
