//! Validation test suite.
//!
//! Pinned numerical cases from the production wallet's quote engine.
//! Every expected value here is an exact decimal string; a change in
//! any digit is a regression, not a tolerance issue.

#[cfg(test)]
mod day_count_validation {
    use crate::daycount::days_between;
    use crate::types::Date;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_dc_issue_to_maturity_window() {
        // The reference bill: issued 2024-12-06, maturing 2025-03-31
        assert_eq!(days_between(date("2024-12-06"), date("2025-03-31")), 115);
    }

    #[test]
    fn test_dc_full_leap_year() {
        assert_eq!(days_between(date("2004-01-03"), date("2005-01-03")), 366);
    }

    #[test]
    fn test_dc_full_common_year() {
        assert_eq!(days_between(date("2009-01-03"), date("2010-01-03")), 365);
    }

    #[test]
    fn test_dc_antisymmetry_across_leap_day() {
        let a = date("2024-02-28");
        let b = date("2024-03-01");
        assert_eq!(days_between(a, b), -days_between(b, a));
    }
}

#[cfg(test)]
mod discount_validation {
    use crate::discount::{gross_to_net, net_to_gross};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // =========================================================================
    // netToGross pinned outputs
    // =========================================================================

    #[test]
    fn test_ng_001_reference_bill() {
        assert_eq!(
            net_to_gross(dec!(10.12), dec!(0.045), 115),
            Some(dec!(10.26759670259987317692))
        );
    }

    #[test]
    fn test_ng_002_hundred_percent_full_year() {
        // divisor = 1 - 365/360 < 0; the quotient reflects the
        // division-scale rounding of 365/360, hence not exactly -72
        assert_eq!(
            net_to_gross(dec!(1), dec!(1), 365),
            Some(dec!(-71.99999999999999999424))
        );
    }

    #[test]
    fn test_ng_003_just_below_boundary() {
        assert_eq!(
            net_to_gross(dec!(1), dec!(0.9863), 365),
            Some(dec!(719999.999999999424))
        );
    }

    #[test]
    fn test_ng_004_boundary_crossing() {
        // 0.9864 × 365 = 360.036: divisor is exactly -0.0001
        assert_eq!(net_to_gross(dec!(1), dec!(0.9864), 365), Some(dec!(-10000)));
    }

    #[test]
    fn test_ng_005_past_boundary() {
        assert_eq!(
            net_to_gross(dec!(1), dec!(0.9865), 365),
            Some(dec!(-4965.51724137931031743163))
        );
    }

    #[test]
    fn test_ng_006_singularity() {
        // rate × days == 360 exactly, in several factorizations
        assert_eq!(net_to_gross(dec!(1), dec!(1), 360), None);
        assert_eq!(net_to_gross(dec!(1), dec!(0.5), 720), None);
        assert_eq!(net_to_gross(dec!(1), dec!(2), 180), None);
        assert_eq!(net_to_gross(dec!(0), dec!(1), 360), None);
    }

    // =========================================================================
    // grossToNet (total, no singularity)
    // =========================================================================

    #[test]
    fn test_gn_001_terminating_fraction() {
        assert_eq!(gross_to_net(dec!(100), dec!(0.045), 80), dec!(99));
    }

    #[test]
    fn test_gn_002_defined_at_the_boundary() {
        assert_eq!(gross_to_net(dec!(1), dec!(1), 360), Decimal::ZERO);
    }

    #[test]
    fn test_gn_003_zero_rate_is_identity() {
        assert_eq!(gross_to_net(dec!(10.12), Decimal::ZERO, 115), dec!(10.12));
    }
}
